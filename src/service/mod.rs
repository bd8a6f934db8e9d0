pub mod agent_flow;
pub mod decision_service;
pub mod event_service;
pub mod llm_service;
pub mod weather_service;
