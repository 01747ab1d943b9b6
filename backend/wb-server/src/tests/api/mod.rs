mod error;
mod extractors;
mod message_response;
