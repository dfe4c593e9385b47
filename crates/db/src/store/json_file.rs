use std::path::{Path, PathBuf};

use async_trait::async_trait;
use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use slotbook_core::{errors::BookingResult, models::booking::Booking};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{BookingStore, memory};

/// On-disk shape of the store
///
/// Only the bookings are written; slot selection never leaves the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedBookings {
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// Bookings kept in memory and rewritten to a JSON file after every change
///
/// A change only becomes visible once the file write has succeeded.
#[derive(Debug)]
pub struct JsonFileBookingStore {
    path: PathBuf,
    bookings: RwLock<Vec<Booking>>,
}

impl JsonFileBookingStore {
    /// Opens the store at `path`, starting empty if the file does not exist yet
    pub async fn open(path: impl Into<PathBuf>) -> BookingResult<Self> {
        let path = path.into();

        let persisted = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<PersistedBookings>(&bytes)
                .wrap_err_with(|| format!("Invalid booking store file {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => PersistedBookings::default(),
            Err(e) => {
                return Err(eyre::Report::new(e)
                    .wrap_err(format!("Failed to read booking store {}", path.display()))
                    .into());
            }
        };

        info!(
            "Opened booking store {} with {} bookings",
            path.display(),
            persisted.bookings.len()
        );

        Ok(Self {
            path,
            bookings: RwLock::new(persisted.bookings),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, bookings: &[Booking]) -> BookingResult<()> {
        let persisted = PersistedBookings {
            bookings: bookings.to_vec(),
        };
        let json = serde_json::to_vec_pretty(&persisted).wrap_err("Failed to encode bookings")?;
        tokio::fs::write(&self.path, json)
            .await
            .wrap_err_with(|| format!("Failed to write booking store {}", self.path.display()))?;

        debug!("Wrote {} bookings to {}", bookings.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl BookingStore for JsonFileBookingStore {
    async fn list(&self) -> BookingResult<Vec<Booking>> {
        Ok(self.bookings.read().await.clone())
    }

    async fn add(&self, booking: Booking) -> BookingResult<()> {
        let mut bookings = self.bookings.write().await;
        let mut next = bookings.clone();
        memory::append(&mut next, booking)?;
        self.persist(&next).await?;
        *bookings = next;
        Ok(())
    }

    async fn remove(&self, code: &str) -> BookingResult<bool> {
        let mut bookings = self.bookings.write().await;
        let mut next = bookings.clone();
        if !memory::remove_by_code(&mut next, code) {
            return Ok(false);
        }
        self.persist(&next).await?;
        *bookings = next;
        Ok(true)
    }

    async fn replace(&self, code: &str, booking: Booking) -> BookingResult<bool> {
        let mut bookings = self.bookings.write().await;
        let mut next = bookings.clone();
        if !memory::replace_by_code(&mut next, code, booking)? {
            return Ok(false);
        }
        self.persist(&next).await?;
        *bookings = next;
        Ok(true)
    }
}
