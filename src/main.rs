use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_core::{
    format_slot_display, generate_time_slots, slots::SlotPolicy, time::format_minutes,
};
use slotbook_db::{config::StoreConfig, session::BookingSession};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = StoreConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = config.open().await?;
    let session = BookingSession::with_system_clock(store);

    let bookings = session.bookings().await?;
    info!("{} bookings on record", bookings.len());

    let policy = SlotPolicy::PRESENTATIONS;
    for window in policy.windows {
        println!(
            "{} session: room opens {}, slots {}-{}",
            window.name,
            format_minutes(window.opens),
            format_minutes(window.first_slot),
            format_minutes(window.ends)
        );
    }

    let slots = generate_time_slots();
    let mut current_date = None;
    for slot in &slots {
        if current_date != Some(slot.date.as_str()) {
            println!();
            current_date = Some(slot.date.as_str());
        }
        let status = session.engine().slot_status(slot, &bookings);
        println!(
            "  {} to {}  [{}]",
            format_slot_display(slot),
            slot.end_time,
            status
        );
    }

    println!();
    match session.next_bookable_slot().await? {
        Some(slot) => println!("Next bookable slot: {}", format_slot_display(&slot)),
        None => println!("No bookable slots left."),
    }

    Ok(())
}
