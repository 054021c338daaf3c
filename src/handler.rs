//! Request handler boundary: every outcome becomes a well-formed response.

use log::{debug, error, info, warn};
use reqwest::Method;

use crate::error::{HandlerError, Result};
use crate::event::{Event, Response};
use crate::reply::ReplyStrategy;
use crate::types::{ChatRequest, Reply};

/// Handle one inbound event.
pub async fn handle_event(event: &Event, strategy: &ReplyStrategy) -> Response {
    let method = event.method();
    info!("Received {method} request");

    if method == Method::OPTIONS.as_str() {
        debug!("Answering CORS preflight");
        return Response::preflight();
    }

    match process(event, strategy).await {
        Ok(reply) => {
            info!("Replied with model {}", reply.model);
            Response::reply(&reply)
        }
        Err(e) => {
            match &e {
                HandlerError::MethodNotAllowed | HandlerError::EmptyMessage => {
                    warn!("Rejected request: {e}");
                }
                _ => error!("Error processing request: {e}"),
            }
            Response::error(&e)
        }
    }
}

async fn process(event: &Event, strategy: &ReplyStrategy) -> Result<Reply> {
    if event.method() != Method::POST.as_str() {
        return Err(HandlerError::MethodNotAllowed);
    }

    let request = ChatRequest::from_body(event.body.as_deref());
    if request.message.is_empty() {
        return Err(HandlerError::EmptyMessage);
    }
    debug!(
        "Message has {} characters, history has {} entries",
        request.message.chars().count(),
        request.history.len()
    );

    strategy.reply(&request).await
}
