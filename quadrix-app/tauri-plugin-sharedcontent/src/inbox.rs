//! Routing of resolved shares to either a live event or the launch property.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use crate::config::Config;
use crate::models::{LaunchProps, ShareIntent};
use crate::resolver::{resolve, MetadataSource};
use crate::Result;

/// Lifecycle of the webview as far as share delivery is concerned.
///
/// Starts as `ColdStartPending` and moves to `Running` once, when the frontend
/// reads its launch properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    ColdStartPending,
    Running,
}

/// What happened to an inbound intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Emit this envelope as a `content-shared` event.
    Emit(String),
    /// Stored as the `sharedContent` launch property.
    LaunchProperty,
    /// Not a share action.
    Ignored,
}

#[derive(Debug)]
struct InboxState {
    phase: LaunchPhase,
    launch_content: Option<String>,
}

/// Holds the launch phase and the pending launch property.
#[derive(Debug)]
pub struct ShareInbox {
    config: Config,
    state: Mutex<InboxState>,
}

impl ShareInbox {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: Mutex::new(InboxState {
                phase: LaunchPhase::ColdStartPending,
                launch_content: None,
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> LaunchPhase {
        self.lock().phase
    }

    /// Resolve an intent and decide how it reaches the frontend.
    ///
    /// During cold start the envelope replaces any earlier launch property.
    pub fn accept(&self, intent: &ShareIntent, source: &dyn MetadataSource) -> Result<Delivery> {
        if !intent.is_send() {
            debug!("Ignoring intent with action {}", intent.action);
            return Ok(Delivery::Ignored);
        }

        let envelope = resolve(intent, source, &self.config)?.to_envelope()?;

        let mut state = self.lock();
        match state.phase {
            LaunchPhase::ColdStartPending => {
                info!("Storing shared {} content as launch property", intent.mime_type);
                state.launch_content = Some(envelope);
                Ok(Delivery::LaunchProperty)
            }
            LaunchPhase::Running => Ok(Delivery::Emit(envelope)),
        }
    }

    /// Hand the launch properties to the frontend and switch to `Running`.
    ///
    /// Later calls return no shared content.
    pub fn take_launch_props(&self) -> LaunchProps {
        let mut state = self.lock();
        if state.phase == LaunchPhase::ColdStartPending {
            debug!("Frontend ready, share intents are now delivered as events");
            state.phase = LaunchPhase::Running;
        }
        LaunchProps {
            shared_content: state.launch_content.take(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, InboxState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ShareInbox {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::tests::FakeProvider;
    use crate::Error;

    #[test]
    fn test_cold_start_share_becomes_launch_property() {
        let inbox = ShareInbox::default();
        let intent = ShareIntent::text("text/plain", "hello");

        let delivery = inbox.accept(&intent, &FakeProvider::default()).unwrap();
        assert_eq!(delivery, Delivery::LaunchProperty);

        let props = inbox.take_launch_props();
        let envelope = props.shared_content.expect("launch property should be set");
        assert_eq!(
            envelope,
            r#"{"mimeType":"text/plain","uri":"hello","fileName":"","fileSize":""}"#
        );
        assert_eq!(inbox.phase(), LaunchPhase::Running);
    }

    #[test]
    fn test_launch_props_consumed_once() {
        let inbox = ShareInbox::default();
        inbox
            .accept(&ShareIntent::text("text/plain", "once"), &FakeProvider::default())
            .unwrap();

        assert!(inbox.take_launch_props().shared_content.is_some());
        assert!(inbox.take_launch_props().shared_content.is_none());
    }

    #[test]
    fn test_running_share_is_emitted_not_stored() {
        let inbox = ShareInbox::default();
        assert!(inbox.take_launch_props().shared_content.is_none());

        let uri = "content://media/1";
        let provider = FakeProvider::with(uri, Some("photo.png"), Some(1024));
        let delivery = inbox
            .accept(&ShareIntent::stream("image/png", uri), &provider)
            .unwrap();

        match delivery {
            Delivery::Emit(envelope) => {
                assert!(envelope.contains(r#""fileName":"photo.png""#));
                assert!(envelope.contains(r#""fileSize":"1024""#));
            }
            other => panic!("expected an event, got {other:?}"),
        }
        assert!(inbox.take_launch_props().shared_content.is_none());
    }

    #[test]
    fn test_latest_cold_start_share_wins() {
        let inbox = ShareInbox::default();
        let provider = FakeProvider::default();
        inbox.accept(&ShareIntent::text("text/plain", "first"), &provider).unwrap();
        inbox.accept(&ShareIntent::text("text/plain", "second"), &provider).unwrap();

        let envelope = inbox.take_launch_props().shared_content.unwrap();
        assert!(envelope.contains("second"));
    }

    #[test]
    fn test_non_send_action_is_ignored() {
        let inbox = ShareInbox::default();
        let intent = ShareIntent {
            action: "android.intent.action.MAIN".into(),
            ..ShareIntent::text("text/plain", "hello")
        };

        assert_eq!(
            inbox.accept(&intent, &FakeProvider::default()).unwrap(),
            Delivery::Ignored
        );
        assert!(inbox.take_launch_props().shared_content.is_none());
    }

    #[test]
    fn test_failed_share_leaves_no_launch_property() {
        let inbox = ShareInbox::default();
        let result = inbox.accept(
            &ShareIntent::stream("video/mp4", "content://media/2"),
            &FakeProvider::default(),
        );

        assert!(matches!(result, Err(Error::UnsupportedMimeType(_))));
        assert!(inbox.take_launch_props().shared_content.is_none());
    }
}
