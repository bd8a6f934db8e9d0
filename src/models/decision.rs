use crate::error::AgentError;

pub const NO_EMAIL_SENTINEL: &str = "NO_EMAIL_NEEDED";
const SUBJECT_MARKER: &str = "SUBJECT:";
const BODY_MARKER: &str = "BODY:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentDecision {
    NoAlert,
    Alert {
        subject: String,
        body: String,
        /// The reply exactly as the model produced it.
        raw: String,
    },
}

/// Classifies a model reply.
///
/// A `SUBJECT:`/`BODY:` email wins. Otherwise the sentinel counts only when a
/// line holds nothing else, so a reply that discusses `NO_EMAIL_NEEDED` in
/// prose is not read as "no alert". Anything else is rejected and carries the
/// reply so it can still be shown.
pub fn parse_decision(reply: &str) -> Result<AgentDecision, AgentError> {
    let malformed = |reason: String| AgentError::MalformedReply {
        reason,
        reply: reply.to_string(),
    };
    if reply.trim().is_empty() {
        return Err(malformed("reply was empty".to_string()));
    }

    match parse_email(reply) {
        Ok((subject, body)) => Ok(AgentDecision::Alert {
            subject,
            body,
            raw: reply.to_string(),
        }),
        Err(_) if reply.lines().any(|l| l.trim() == NO_EMAIL_SENTINEL) => {
            Ok(AgentDecision::NoAlert)
        }
        Err(reason) => Err(malformed(reason)),
    }
}

fn parse_email(reply: &str) -> Result<(String, String), String> {
    let lines: Vec<&str> = reply.lines().collect();
    let subject_idx = lines
        .iter()
        .position(|l| l.trim_start().starts_with(SUBJECT_MARKER))
        .ok_or_else(|| format!("missing {} line", SUBJECT_MARKER))?;
    let body_offset = lines[subject_idx + 1..]
        .iter()
        .position(|l| l.trim_start().starts_with(BODY_MARKER))
        .ok_or_else(|| format!("missing {} section after {}", BODY_MARKER, SUBJECT_MARKER))?;
    let body_idx = subject_idx + 1 + body_offset;

    let subject = lines[subject_idx].trim_start()[SUBJECT_MARKER.len()..]
        .trim()
        .to_string();
    if subject.is_empty() {
        return Err("subject is empty".to_string());
    }

    let mut body_lines = vec![lines[body_idx].trim_start()[BODY_MARKER.len()..].trim_start()];
    body_lines.extend_from_slice(&lines[body_idx + 1..]);
    let body = body_lines.join("\n").trim().to_string();

    Ok((subject, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_sentinel_is_no_alert() {
        assert_eq!(parse_decision("NO_EMAIL_NEEDED").unwrap(), AgentDecision::NoAlert);
        assert_eq!(
            parse_decision("\n  NO_EMAIL_NEEDED  \n").unwrap(),
            AgentDecision::NoAlert
        );
    }

    #[test]
    fn sentinel_line_followed_by_reasoning_is_no_alert() {
        let reply = "NO_EMAIL_NEEDED\n\nSkies are clear all morning.";
        assert_eq!(parse_decision(reply).unwrap(), AgentDecision::NoAlert);
    }

    #[test]
    fn reasoning_before_sentinel_line_is_no_alert() {
        let reply = "Looking at the forecast, conditions are mild.\n\nNO_EMAIL_NEEDED";
        assert_eq!(parse_decision(reply).unwrap(), AgentDecision::NoAlert);
    }

    #[test]
    fn subject_and_body_are_extracted() {
        let reply = "SUBJECT: Storms tomorrow morning\nBODY: Hi!\n\nBring a rain jacket for your run.";
        match parse_decision(reply).unwrap() {
            AgentDecision::Alert { subject, body, raw } => {
                assert_eq!(subject, "Storms tomorrow morning");
                assert_eq!(body, "Hi!\n\nBring a rain jacket for your run.");
                assert_eq!(raw, reply);
            }
            other => panic!("expected alert, got {:?}", other),
        }
    }

    #[test]
    fn email_that_mentions_sentinel_is_still_an_alert() {
        let reply = "SUBJECT: Rain alert\nBODY: I considered replying NO_EMAIL_NEEDED, but rain is likely.";
        assert!(matches!(
            parse_decision(reply).unwrap(),
            AgentDecision::Alert { .. }
        ));
    }

    #[test]
    fn prose_mentioning_sentinel_is_malformed() {
        let reply = "The weather is fine, so I would say NO_EMAIL_NEEDED here.";
        let err = parse_decision(reply).unwrap_err();
        assert!(matches!(err, AgentError::MalformedReply { .. }));
        assert_eq!(err.reply(), Some(reply));
    }

    #[test]
    fn subject_without_body_is_malformed() {
        let err = parse_decision("SUBJECT: Heads up").unwrap_err();
        assert!(matches!(err, AgentError::MalformedReply { reason, .. } if reason.contains("BODY:")));
    }

    #[test]
    fn empty_subject_is_malformed() {
        let err = parse_decision("SUBJECT:\nBODY: something").unwrap_err();
        assert!(matches!(err, AgentError::MalformedReply { reason, .. } if reason.contains("subject")));
    }

    #[test]
    fn markdown_email_keeps_reply_text() {
        let reply = "**SUBJECT:** Storms tomorrow\n**BODY:** Bring a jacket.";
        let err = parse_decision(reply).unwrap_err();
        assert_eq!(err.detail(), "missing SUBJECT: line");
        assert_eq!(err.reply(), Some(reply));
    }

    #[test]
    fn empty_reply_is_malformed() {
        assert!(matches!(
            parse_decision("  \n ").unwrap_err(),
            AgentError::MalformedReply { .. }
        ));
    }
}
