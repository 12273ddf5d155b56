//! Hotel actor: a Tokio task that owns one [`Hotel`] and serves callers
//! one command at a time.
//!
//! A `Hotel` is plain single-owner state with `&mut self` operations. To
//! share it between tasks, the actor takes ownership and receives
//! commands over an mpsc channel. Commands are handled strictly in
//! arrival order, so exactly one operation is ever in flight and no lock
//! is needed around the registries.

use std::path::PathBuf;

use innkeep_rooms::LoadReport;
use innkeep_types::{JsonCodec, LedgerEntry, RoomView, StayView, VacantRoom};
use tokio::sync::{mpsc, oneshot};

use crate::{CheckInReceipt, CheckOutReceipt, Hotel, HotelConfig, HotelError};

type Reply<T> = oneshot::Sender<T>;

/// Commands sent to the hotel actor.
///
/// Each carries a reply channel; the caller sends the command and waits on
/// the matching receiver.
enum HotelCommand {
    Initialize {
        path: PathBuf,
        reply: Reply<Result<LoadReport, HotelError>>,
    },
    CheckIn {
        name: String,
        check_in: String,
        check_out: String,
        reply: Reply<Result<CheckInReceipt, HotelError>>,
    },
    CheckOut {
        name: String,
        reply: Reply<Result<CheckOutReceipt, HotelError>>,
    },
    Rooms {
        reply: Reply<Vec<RoomView>>,
    },
    AvailableRooms {
        reply: Reply<Vec<VacantRoom>>,
    },
    BookedRooms {
        reply: Reply<Vec<StayView>>,
    },
    Billing {
        reply: Reply<Vec<LedgerEntry>>,
    },
    Save {
        path: PathBuf,
        reply: Reply<Result<usize, HotelError>>,
    },
    SaveSnapshot {
        path: PathBuf,
        reply: Reply<Result<(), HotelError>>,
    },
    /// Replace the served hotel with one read from a snapshot. On failure
    /// the current hotel keeps serving.
    LoadSnapshot {
        path: PathBuf,
        reply: Reply<Result<(), HotelError>>,
    },
    /// Stop the actor and hand the hotel back.
    Shutdown {
        reply: Reply<Hotel>,
    },
}

/// Handle to a running hotel actor.
///
/// Cheap to clone: it is only an `mpsc::Sender`. Once the actor has shut
/// down every call returns [`HotelError::Unavailable`].
#[derive(Clone)]
pub struct HotelHandle {
    sender: mpsc::Sender<HotelCommand>,
}

impl HotelHandle {
    /// Spawns an actor serving `hotel` on the current Tokio runtime.
    ///
    /// `channel_size` bounds the command queue; when it is full, callers
    /// wait.
    pub fn spawn(hotel: Hotel, channel_size: usize) -> Self {
        let (tx, rx) = mpsc::channel(channel_size.max(1));
        let actor = HotelActor {
            hotel,
            receiver: rx,
        };
        tokio::spawn(actor.run());
        Self { sender: tx }
    }

    /// Spawns an actor with the queue depth from `config`.
    pub fn with_config(hotel: Hotel, config: &HotelConfig) -> Self {
        Self::spawn(hotel, config.channel_size)
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(Reply<T>) -> HotelCommand,
    ) -> Result<T, HotelError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(command(reply_tx))
            .await
            .map_err(|_| HotelError::Unavailable)?;
        reply_rx.await.map_err(|_| HotelError::Unavailable)
    }

    pub async fn initialize(&self, path: impl Into<PathBuf>) -> Result<LoadReport, HotelError> {
        let path = path.into();
        self.request(|reply| HotelCommand::Initialize { path, reply })
            .await?
    }

    pub async fn check_in(
        &self,
        name: impl Into<String>,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Result<CheckInReceipt, HotelError> {
        let (name, check_in, check_out) = (name.into(), check_in.into(), check_out.into());
        self.request(|reply| HotelCommand::CheckIn {
            name,
            check_in,
            check_out,
            reply,
        })
        .await?
    }

    pub async fn check_out(&self, name: impl Into<String>) -> Result<CheckOutReceipt, HotelError> {
        let name = name.into();
        self.request(|reply| HotelCommand::CheckOut { name, reply })
            .await?
    }

    pub async fn rooms(&self) -> Result<Vec<RoomView>, HotelError> {
        self.request(|reply| HotelCommand::Rooms { reply }).await
    }

    pub async fn available_rooms(&self) -> Result<Vec<VacantRoom>, HotelError> {
        self.request(|reply| HotelCommand::AvailableRooms { reply })
            .await
    }

    pub async fn booked_rooms(&self) -> Result<Vec<StayView>, HotelError> {
        self.request(|reply| HotelCommand::BookedRooms { reply })
            .await
    }

    pub async fn billing(&self) -> Result<Vec<LedgerEntry>, HotelError> {
        self.request(|reply| HotelCommand::Billing { reply }).await
    }

    pub async fn save(&self, path: impl Into<PathBuf>) -> Result<usize, HotelError> {
        let path = path.into();
        self.request(|reply| HotelCommand::Save { path, reply })
            .await?
    }

    pub async fn save_snapshot(&self, path: impl Into<PathBuf>) -> Result<(), HotelError> {
        let path = path.into();
        self.request(|reply| HotelCommand::SaveSnapshot { path, reply })
            .await?
    }

    pub async fn load_snapshot(&self, path: impl Into<PathBuf>) -> Result<(), HotelError> {
        let path = path.into();
        self.request(|reply| HotelCommand::LoadSnapshot { path, reply })
            .await?
    }

    /// Stops the actor after the commands already queued, and returns
    /// the hotel it was serving.
    pub async fn shutdown(&self) -> Result<Hotel, HotelError> {
        self.request(|reply| HotelCommand::Shutdown { reply })
            .await
    }
}

/// The actor state. Runs inside a Tokio task.
struct HotelActor {
    hotel: Hotel,
    receiver: mpsc::Receiver<HotelCommand>,
}

impl HotelActor {
    /// Processes commands until shutdown or until every handle is dropped.
    async fn run(mut self) {
        tracing::info!("hotel service started");

        while let Some(command) = self.receiver.recv().await {
            // A dropped receiver means the caller stopped waiting; the
            // operation has still been applied.
            match command {
                HotelCommand::Initialize { path, reply } => {
                    let _ = reply.send(self.hotel.initialize(&path));
                }
                HotelCommand::CheckIn {
                    name,
                    check_in,
                    check_out,
                    reply,
                } => {
                    let _ = reply.send(self.hotel.check_in(&name, &check_in, &check_out));
                }
                HotelCommand::CheckOut { name, reply } => {
                    let _ = reply.send(self.hotel.check_out(&name));
                }
                HotelCommand::Rooms { reply } => {
                    let _ = reply.send(self.hotel.rooms());
                }
                HotelCommand::AvailableRooms { reply } => {
                    let _ = reply.send(self.hotel.available_rooms());
                }
                HotelCommand::BookedRooms { reply } => {
                    let _ = reply.send(self.hotel.booked_rooms());
                }
                HotelCommand::Billing { reply } => {
                    let _ = reply.send(self.hotel.billing());
                }
                HotelCommand::Save { path, reply } => {
                    let _ = reply.send(self.hotel.save(&path));
                }
                HotelCommand::SaveSnapshot { path, reply } => {
                    let _ = reply.send(self.hotel.save_snapshot(&path, &JsonCodec));
                }
                HotelCommand::LoadSnapshot { path, reply } => {
                    let result = Hotel::load_snapshot(&path, &JsonCodec).map(|hotel| {
                        self.hotel = hotel;
                    });
                    let _ = reply.send(result);
                }
                HotelCommand::Shutdown { reply } => {
                    tracing::info!("hotel service shutting down");
                    let _ = reply.send(self.hotel);
                    return;
                }
            }
        }

        tracing::info!("hotel service stopped");
    }
}
