use crate::api::TaskService;
use crate::config::Config;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::notify::Notifier;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing and state synchronization on behalf of a front
/// end. The front end reads the shared state and dispatches events; the
/// engine keeps that state in sync with the remote collection.
///
pub struct App {
    state: Arc<Mutex<State>>,
    sender: NetworkEventSender,
}

impl App {
    /// Start the synchronization engine according to the given configuration.
    /// Spawns the network thread and schedules the initial fetch of the task
    /// collection.
    ///
    pub fn start(config: Config, notifier: Arc<dyn Notifier>) -> Result<App> {
        info!("Starting synchronization engine...");
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(tx.clone()))),
            sender: tx,
        };
        app.start_network(rx, config.base_url, notifier);
        app.sender.send(NetworkEvent::Refresh)?;
        Ok(app)
    }

    /// Shared handle to the synchronization state.
    ///
    pub fn state(&self) -> Arc<Mutex<State>> {
        Arc::clone(&self.state)
    }

    /// Channel for dispatching network events directly. Prefer
    /// `State::dispatch` for mutations so the in-flight guard applies.
    ///
    pub fn sender(&self) -> NetworkEventSender {
        self.sender.clone()
    }

    /// Start a separate thread for asynchronous state mutations. The thread
    /// processes events sequentially, so no operation issues a second remote
    /// call before the first resolves; it exits when every sender is dropped.
    ///
    fn start_network(
        &self,
        net_receiver: NetworkEventReceiver,
        base_url: String,
        notifier: Arc<dyn Notifier>,
    ) {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to create network runtime")
                .block_on(async {
                    let service = TaskService::new(&base_url);
                    let mut handler =
                        NetworkEventHandler::new(&cloned_state, &service, notifier.as_ref());
                    while let Ok(network_event) = net_receiver.recv() {
                        match handler.handle(network_event).await {
                            Ok(_) => (),
                            Err(e) => error!("Failed to handle network event: {}", e),
                        }
                    }
                    debug!("Network event channel closed; stopping.");
                })
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotifier;
    use httpmock::MockServer;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn start_performs_initial_refresh() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/tasks");
                then.status(200).json_body(json!([
                    { "_id": "1", "name": "seeded", "completed": false },
                ]));
            })
            .await;

        let mut config = Config::new();
        config.base_url = server.base_url();
        let app = App::start(config, Arc::new(MemoryNotifier::new()))
            .expect("engine should start");

        // The initial refresh runs on the network thread; poll for it.
        let state = app.state();
        for _ in 0..100 {
            if !state.lock().await.get_tasks().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(state.lock().await.get_tasks().len(), 1);
    }

    #[tokio::test]
    async fn dispatch_through_state_reaches_the_handler() {
        let server = MockServer::start();
        let list_mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/tasks");
                then.status(200).json_body(json!([]));
            })
            .await;
        let delete_mock = server
            .mock_async(|when, then| {
                when.method("DELETE").path("/api/tasks/42");
                then.status(204);
            })
            .await;

        let mut config = Config::new();
        config.base_url = server.base_url();
        let app = App::start(config, Arc::new(MemoryNotifier::new()))
            .expect("engine should start");

        {
            let state = app.state();
            let mut state = state.lock().await;
            state.dispatch(NetworkEvent::DeleteTask {
                id: "42".to_string(),
            });
        }

        for _ in 0..100 {
            if delete_mock.hits_async().await > 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        delete_mock.assert_async().await;
        assert!(list_mock.hits_async().await >= 1);
    }
}
