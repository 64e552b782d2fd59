pub mod csv_recommendation_store;
pub mod dialoguer_prompter;
pub mod gemini_client_http;
pub mod memory_session_store;
pub mod template;
