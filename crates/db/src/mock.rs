use async_trait::async_trait;
use mockall::mock;
use slotbook_core::{errors::BookingResult, models::booking::Booking};

use crate::store::BookingStore;

// Mock store for testing session behaviour against failing or scripted backends
mock! {
    pub BookingRepo {}

    #[async_trait]
    impl BookingStore for BookingRepo {
        async fn list(&self) -> BookingResult<Vec<Booking>>;
        async fn add(&self, booking: Booking) -> BookingResult<()>;
        async fn remove(&self, code: &str) -> BookingResult<bool>;
        async fn replace(&self, code: &str, booking: Booking) -> BookingResult<bool>;
        async fn get(&self, code: &str) -> BookingResult<Option<Booking>>;
    }
}
