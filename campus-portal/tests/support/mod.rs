#![allow(dead_code)]

use std::collections::VecDeque;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use campus_core::{PortalConfig, RecordFilter, Repository};
use campus_portal::services::resources::Resource;
use campus_portal::Portal;
use tokio::sync::{oneshot, Mutex};

/// Demo portal with every artificial delay switched off.
pub fn demo_portal() -> Portal {
    Portal::with_demo_data(&instant_config())
}

pub fn instant_config() -> PortalConfig {
    PortalConfig::new().with("latency.enabled", "false")
}

/// Resource repository whose `list` calls resolve when the test says so.
///
/// The n-th `list` call waits on the n-th receiver handed out by [`script`].
pub struct ScriptedResources {
    replies: Mutex<VecDeque<oneshot::Receiver<Vec<Resource>>>>,
}

/// A repository plus one sender per scripted `list` reply, in call order.
pub fn script(calls: usize) -> (ScriptedResources, Vec<oneshot::Sender<Vec<Resource>>>) {
    let mut senders = Vec::with_capacity(calls);
    let mut receivers = VecDeque::with_capacity(calls);
    for _ in 0..calls {
        let (tx, rx) = oneshot::channel();
        senders.push(tx);
        receivers.push_back(rx);
    }
    (
        ScriptedResources {
            replies: Mutex::new(receivers),
        },
        senders,
    )
}

#[async_trait]
impl Repository<Resource> for ScriptedResources {
    async fn list(&self, _filter: &dyn RecordFilter<Resource>) -> Result<Vec<Resource>> {
        let reply = self
            .replies
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted reply left"))?;
        Ok(reply.await?)
    }
}
