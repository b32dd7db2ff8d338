use chrono::Utc;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::models::reservation::Reservation;
use crate::services::availability::is_available;
use crate::services::error::ReservationError;

const HEADERS: [&str; 8] = [
    "date",
    "room",
    "startTime",
    "endTime",
    "name",
    "department",
    "meetingPurpose",
    "createdAt",
];

// Reservation database: a CSV file mirrored by an in-memory list
//
// The list is loaded once when the store is opened and only ever grows.
pub struct ReservationStore {
    csv_path: PathBuf,
    reservations: Mutex<Vec<Reservation>>,
}

impl ReservationStore {
    /// Open the store at `csv_path`, creating the file with headers if needed.
    pub fn open(csv_path: impl AsRef<Path>) -> Result<Self, ReservationError> {
        let csv_path = csv_path.as_ref().to_path_buf();

        // A zero-byte file has no header row either; rows appended to it would
        // be read back as the header
        let needs_headers = match csv_path.metadata() {
            Ok(metadata) => metadata.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };

        if needs_headers {
            info!(
                "Initializing reservations database file at {}",
                csv_path.display()
            );

            let file = File::create(&csv_path)?;
            let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);
            writer.write_record(HEADERS)?;
            writer.flush()?;
        }

        let reservations = read_reservations(&csv_path)?;
        info!(
            "Loaded {} reservations from {}",
            reservations.len(),
            csv_path.display()
        );

        Ok(Self {
            csv_path,
            reservations: Mutex::new(reservations),
        })
    }

    pub fn path(&self) -> &Path {
        &self.csv_path
    }

    /// Re-read the backing file, replacing the in-memory list.
    pub fn load(&self) -> Result<Vec<Reservation>, ReservationError> {
        let mut guard = self.lock()?;
        let reservations = read_reservations(&self.csv_path)?;
        *guard = reservations.clone();
        Ok(reservations)
    }

    /// Snapshot of every stored reservation in insertion order.
    pub fn list(&self) -> Result<Vec<Reservation>, ReservationError> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> Result<usize, ReservationError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, ReservationError> {
        Ok(self.len()? == 0)
    }

    /// Append a reservation if its interval is still free.
    ///
    /// The availability check and the write happen under one lock, so two
    /// submissions racing for the same slot cannot both be stored.
    pub fn append(&self, mut reservation: Reservation) -> Result<Reservation, ReservationError> {
        let mut guard = self.lock()?;

        if !is_available(
            &guard,
            Some(&reservation.date),
            Some(&reservation.room),
            &reservation.start_time,
            &reservation.end_time,
        ) {
            warn!(
                "Rejected reservation for room {} on {} {}: slot already taken",
                reservation.room,
                reservation.date,
                reservation.time_range()
            );
            return Err(ReservationError::Conflict {
                date: reservation.date,
                room: reservation.room,
                start_time: reservation.start_time,
                end_time: reservation.end_time,
            });
        }

        if reservation.created_at.is_empty() {
            reservation.created_at = Utc::now().to_rfc3339();
        }

        self.write_record(&reservation)?;
        guard.push(reservation.clone());

        info!(
            "Stored reservation for room {} on {} {} by {}",
            reservation.room,
            reservation.date,
            reservation.time_range(),
            reservation.name
        );

        Ok(reservation)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Reservation>>, ReservationError> {
        self.reservations
            .lock()
            .map_err(|e| ReservationError::Storage(format!("Failed to acquire mutex: {}", e)))
    }

    // Append one record to the CSV file; the header row already exists
    fn write_record(&self, reservation: &Reservation) -> Result<(), ReservationError> {
        let file = OpenOptions::new().append(true).open(&self.csv_path)?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(reservation)?;
        writer.flush()?;

        Ok(())
    }
}

// Read all reservations; a missing file is an empty store
fn read_reservations(csv_path: &Path) -> Result<Vec<Reservation>, ReservationError> {
    let file = match File::open(csv_path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No reservations database at {}", csv_path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let mut reservations = Vec::new();

    for result in reader.deserialize::<Reservation>() {
        reservations.push(result?);
    }

    Ok(reservations)
}

// Open the store at the configured path, creating its directory first
pub fn create_reservation_store(
    csv_path: impl AsRef<Path>,
) -> Result<Arc<ReservationStore>, ReservationError> {
    let csv_path = csv_path.as_ref();

    if let Some(dir) = csv_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            ReservationError::Storage(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;
    }

    Ok(Arc::new(ReservationStore::open(csv_path)?))
}
