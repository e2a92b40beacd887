use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use site_logging::{site_info, site_warn};
use sportease_core::{Effect, FetchFailure, Msg, Venue, VenuePage};
use sportease_engine::{EngineEvent, EngineHandle};

use super::theme;

/// Executes core effects against the engine and pumps engine events back
/// into the message channel.
pub(crate) struct EffectRunner {
    engine: Arc<EngineHandle>,
}

impl EffectRunner {
    pub(crate) fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = Arc::new(EngineHandle::new());
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::InitTheme => theme::init(),
                Effect::LoadVenues {
                    activation,
                    locator,
                } => {
                    site_info!("LoadVenues activation={} locator={}", activation, locator);
                    self.engine.load(activation, locator);
                }
            }
        }
    }

    /// Stops reporting engine settlements; in-flight retrievals finish
    /// quietly.
    pub(crate) fn shutdown(&self) {
        self.engine.shutdown();
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::VenuesLoaded { activation, result } => {
                        let outcome = match result {
                            Ok(page) => Ok(map_page(page)),
                            Err(err) => {
                                site_warn!("Venue load {} failed: {}", activation, err);
                                Err(FetchFailure::new(err.to_string()))
                            }
                        };
                        if msg_tx
                            .send(Msg::VenuesSettled { activation, outcome })
                            .is_err()
                        {
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_page(page: sportease_engine::VenuePage) -> VenuePage {
    VenuePage {
        items: page.items.into_iter().map(map_venue).collect(),
    }
}

fn map_venue(venue: sportease_engine::Venue) -> Venue {
    Venue {
        id: venue.id,
        name: venue.name,
        address: venue.address,
        price_per_hour: venue.price_per_hour,
        is_seeded: venue.is_seeded,
    }
}
