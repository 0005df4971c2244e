//! Runs a completion on a worker thread so the UI can keep drawing the spinner.

use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;

use crate::core::llm::{ApiCompletion, Completion, CompletionRequest};

use super::PendingChat;

/// Spawn one completion request. The result arrives on `PendingChat::result_rx`.
pub fn spawn_completion(
    rt: &Arc<Runtime>,
    client: Arc<ApiCompletion>,
    request: CompletionRequest,
) -> PendingChat {
    let (result_tx, result_rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let result = rt_clone.block_on(client.complete(&request));
        let _ = result_tx.send(result);
    });

    PendingChat { result_rx }
}
