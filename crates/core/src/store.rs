//! CSV-backed referral storage.
//!
//! Referrals live in a single append-only CSV file whose first row is always the header
//! [`REFERRAL_FIELDS`]. Rows are written in creation order and never rewritten.
//!
//! # Concurrency
//!
//! There is no locking. Two processes (or two requests) appending at the same time may
//! interleave rows, and two creators may compute the same next identifier. Callers are expected
//! to run a single writer.

use crate::constants::{REFERRAL_FIELDS, STORED_FALSE, STORED_TRUE};
use crate::{ReferralError, ReferralResult};
use api_shared::ReferralRecord;
use referral_types::{Department, DoctorId, PatientId, ReferralId};
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A referral about to be appended to the store.
///
/// Unlike [`ReferralRecord`], every identifier here has already been validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewReferral {
    pub referral_id: ReferralId,
    pub patient_id: PatientId,
    pub current_department: Department,
    pub referred_department: Department,
    pub reason: String,
    pub referred_by: DoctorId,
    pub notes: String,
    pub timestamp: String,
    pub specialist_available: bool,
}

impl NewReferral {
    /// Column values in [`REFERRAL_FIELDS`] order.
    fn to_row(&self) -> [String; 9] {
        [
            self.referral_id.to_string(),
            self.patient_id.to_string(),
            self.current_department.to_string(),
            self.referred_department.to_string(),
            self.reason.clone(),
            self.referred_by.to_string(),
            self.notes.clone(),
            self.timestamp.clone(),
            if self.specialist_available {
                STORED_TRUE
            } else {
                STORED_FALSE
            }
            .to_string(),
        ]
    }
}

/// Handle to the referrals CSV file.
#[derive(Clone, Debug)]
pub struct ReferralStore {
    path: PathBuf,
}

impl ReferralStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the backing file is absent or has zero length.
    ///
    /// # Errors
    ///
    /// Returns [`ReferralError::FileRead`] if the file metadata cannot be read for any reason
    /// other than the file not existing.
    pub fn is_empty_resource(&self) -> ReferralResult<bool> {
        match fs::metadata(&self.path) {
            Ok(metadata) => Ok(metadata.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(ReferralError::FileRead(e)),
        }
    }

    /// Creates the file with its header row if it is absent or empty.
    ///
    /// Safe to call on every start; an existing non-empty file is left untouched, even if its
    /// header is wrong.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the parent directory cannot be created,
    /// - the file cannot be created or the header cannot be written.
    pub fn initialise(&self) -> ReferralResult<()> {
        if !self.is_empty_resource()? {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(ReferralError::StorageDirCreation)?;
            }
        }

        let file = File::create(&self.path).map_err(ReferralError::FileWrite)?;
        let mut writer = Self::row_writer(file);
        writer
            .write_record(REFERRAL_FIELDS)
            .map_err(ReferralError::CsvWrite)?;
        writer.flush().map_err(ReferralError::FileWrite)?;

        tracing::info!("initialised referral file: {}", self.path.display());
        Ok(())
    }

    /// Appends one referral row in the column order of the file's header.
    ///
    /// A missing or empty file is written in [`REFERRAL_FIELDS`] order.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`ReferralError::InvalidStructure`] if the existing header does not match,
    /// - a write error if the file cannot be opened or the row cannot be written.
    pub fn append(&self, referral: &NewReferral) -> ReferralResult<()> {
        let columns = self.header_columns()?.unwrap_or_else(HeaderColumns::standard);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(ReferralError::FileWrite)?;

        let mut writer = Self::row_writer(file);
        writer
            .write_record(&columns.row(referral.to_row()))
            .map_err(ReferralError::CsvWrite)?;
        writer.flush().map_err(ReferralError::FileWrite)?;

        Ok(())
    }

    /// Returns the `referral_id` column of the last data row, or `None` if the file holds only
    /// a header (or is absent or empty).
    ///
    /// # Errors
    ///
    /// Returns [`ReferralError::InvalidStructure`] if the header does not match, or a read error
    /// if the file cannot be read or parsed as CSV.
    pub fn last_referral_id(&self) -> ReferralResult<Option<String>> {
        if self.is_empty_resource()? {
            return Ok(None);
        }

        let mut reader = self.open_reader()?;
        let headers = reader.headers().map_err(ReferralError::CsvRead)?.clone();
        let columns = HeaderColumns::resolve(&headers)?;

        let mut last = None;
        for row in reader.records() {
            let row = row.map_err(ReferralError::CsvRead)?;
            last = Some(row);
        }

        Ok(last.map(|row| {
            row.get(columns.referral_id())
                .unwrap_or_default()
                .to_owned()
        }))
    }

    /// Scans the file for the first row whose `referral_id` equals `referral_id`.
    ///
    /// The header must contain exactly the expected columns, in any order.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`ReferralError::InvalidStructure`] if the header does not match,
    /// - [`ReferralError::NotFound`] if no row matches,
    /// - a read error if the file cannot be opened or parsed.
    pub fn find_by_id(&self, referral_id: &ReferralId) -> ReferralResult<ReferralRecord> {
        let mut reader = self.open_reader()?;
        let headers = reader.headers().map_err(ReferralError::CsvRead)?.clone();
        let columns = HeaderColumns::resolve(&headers)?;

        let wanted = referral_id.to_string();
        for row in reader.records() {
            let row = row.map_err(ReferralError::CsvRead)?;
            if row.get(columns.referral_id()) == Some(wanted.as_str()) {
                return Ok(columns.record(&row));
            }
        }

        Err(ReferralError::NotFound(*referral_id))
    }

    /// Column positions of the existing header, or `None` for an absent or empty file.
    fn header_columns(&self) -> ReferralResult<Option<HeaderColumns>> {
        if self.is_empty_resource()? {
            return Ok(None);
        }

        let mut reader = self.open_reader()?;
        let headers = reader.headers().map_err(ReferralError::CsvRead)?;
        HeaderColumns::resolve(headers).map(Some)
    }

    fn open_reader(&self) -> ReferralResult<csv::Reader<File>> {
        let file = File::open(&self.path).map_err(ReferralError::FileRead)?;
        Ok(csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file))
    }

    fn row_writer(file: File) -> csv::Writer<File> {
        csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file)
    }
}

/// Position of each expected column within a file's header row.
struct HeaderColumns([usize; 9]);

impl HeaderColumns {
    /// Checks the header holds exactly [`REFERRAL_FIELDS`] (order-insensitive) and records where
    /// each column sits.
    fn resolve(headers: &csv::StringRecord) -> ReferralResult<Self> {
        let found: Vec<String> = headers.iter().map(str::to_owned).collect();

        let mut found_sorted = found.clone();
        found_sorted.sort();
        let mut expected_sorted = REFERRAL_FIELDS.map(str::to_owned).to_vec();
        expected_sorted.sort();

        if found_sorted != expected_sorted {
            return Err(ReferralError::InvalidStructure { found });
        }

        let mut positions = [0usize; 9];
        for (slot, name) in positions.iter_mut().zip(REFERRAL_FIELDS) {
            *slot = found
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ReferralError::InvalidStructure {
                    found: found.clone(),
                })?;
        }

        Ok(Self(positions))
    }

    /// Positions for a header written in [`REFERRAL_FIELDS`] order.
    fn standard() -> Self {
        Self(std::array::from_fn(|i| i))
    }

    /// `referral_id` is the first entry of [`REFERRAL_FIELDS`].
    fn referral_id(&self) -> usize {
        self.0[0]
    }

    /// Places values given in [`REFERRAL_FIELDS`] order at their header positions.
    fn row(&self, values: [String; 9]) -> [String; 9] {
        let mut row: [String; 9] = Default::default();
        for (value, position) in values.into_iter().zip(self.0) {
            row[position] = value;
        }
        row
    }

    /// Builds the raw record; columns missing from a short row read as empty strings.
    fn record(&self, row: &csv::StringRecord) -> ReferralRecord {
        let field = |i: usize| row.get(self.0[i]).unwrap_or_default().to_owned();

        ReferralRecord {
            referral_id: field(0),
            patient_id: field(1),
            current_department: field(2),
            referred_department: field(3),
            reason: field(4),
            referred_by: field(5),
            notes: field(6),
            timestamp: field(7),
            specialist_available: field(8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_referral(number: u32) -> NewReferral {
        NewReferral {
            referral_id: ReferralId::from_number(number).unwrap(),
            patient_id: PatientId::parse("PAT123456").unwrap(),
            current_department: Department::Cardiology,
            referred_department: Department::Oncology,
            reason: "Suspected mass, needs review".into(),
            referred_by: DoctorId::parse("DOC654321").unwrap(),
            notes: "Patient prefers \"morning\" slots".into(),
            timestamp: "2026-01-02 03:04:05".into(),
            specialist_available: false,
        }
    }

    fn header_line() -> String {
        REFERRAL_FIELDS.join(",")
    }

    #[test]
    fn test_initialise_writes_header_to_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = ReferralStore::new(temp_dir.path().join("nested/referrals.csv"));

        store.initialise().expect("initialise should succeed");

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, format!("{}\r\n", header_line()));
    }

    #[test]
    fn test_initialise_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = ReferralStore::new(temp_dir.path().join("referrals.csv"));

        store.initialise().unwrap();
        store.append(&sample_referral(1)).unwrap();
        store.initialise().unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.matches("referral_id").count(), 1);
        assert!(contents.contains("REF000001"));
    }

    #[test]
    fn test_initialise_fills_zero_length_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("referrals.csv");
        fs::write(&path, "").unwrap();
        let store = ReferralStore::new(&path);

        assert!(store.is_empty_resource().unwrap());
        store.initialise().unwrap();
        assert!(!store.is_empty_resource().unwrap());
    }

    #[test]
    fn test_append_then_find_returns_raw_fields() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = ReferralStore::new(temp_dir.path().join("referrals.csv"));
        store.initialise().unwrap();
        store.append(&sample_referral(1)).unwrap();

        let record = store.find_by_id(&ReferralId::FIRST).unwrap();
        assert_eq!(record.referral_id, "REF000001");
        assert_eq!(record.patient_id, "PAT123456");
        assert_eq!(record.current_department, "Cardiology");
        assert_eq!(record.referred_department, "Oncology");
        assert_eq!(record.reason, "Suspected mass, needs review");
        assert_eq!(record.referred_by, "DOC654321");
        assert_eq!(record.notes, "Patient prefers \"morning\" slots");
        assert_eq!(record.timestamp, "2026-01-02 03:04:05");
        assert_eq!(record.specialist_available, "False");
    }

    #[test]
    fn test_find_returns_first_match_in_file_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = ReferralStore::new(temp_dir.path().join("referrals.csv"));
        store.initialise().unwrap();

        let mut first = sample_referral(5);
        first.reason = "first".into();
        let mut duplicate = sample_referral(5);
        duplicate.reason = "second".into();
        store.append(&first).unwrap();
        store.append(&duplicate).unwrap();

        let record = store
            .find_by_id(&ReferralId::from_number(5).unwrap())
            .unwrap();
        assert_eq!(record.reason, "first");
    }

    #[test]
    fn test_find_missing_id_is_not_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = ReferralStore::new(temp_dir.path().join("referrals.csv"));
        store.initialise().unwrap();
        store.append(&sample_referral(1)).unwrap();

        let result = store.find_by_id(&ReferralId::from_number(2).unwrap());
        assert!(matches!(result, Err(ReferralError::NotFound(_))));
    }

    #[test]
    fn test_find_accepts_reordered_header() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("referrals.csv");
        fs::write(
            &path,
            "patient_id,referral_id,current_department,referred_department,reason,referred_by,notes,timestamp,specialist_available\n\
             PAT000001,REF000009,Neurology,Cardiology,r,DOC000001,n,2026-01-01 00:00:00,True\n",
        )
        .unwrap();
        let store = ReferralStore::new(&path);

        let record = store
            .find_by_id(&ReferralId::from_number(9).unwrap())
            .unwrap();
        assert_eq!(record.referral_id, "REF000009");
        assert_eq!(record.patient_id, "PAT000001");
        assert_eq!(record.specialist_available, "True");
    }

    #[test]
    fn test_append_follows_reordered_header() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("referrals.csv");
        fs::write(
            &path,
            "patient_id,referral_id,current_department,referred_department,reason,referred_by,notes,timestamp,specialist_available\n\
             PAT000001,REF000001,Neurology,Cardiology,r,DOC000001,n,2026-01-01 00:00:00,True\n",
        )
        .unwrap();
        let store = ReferralStore::new(&path);

        assert_eq!(
            store.last_referral_id().unwrap().as_deref(),
            Some("REF000001")
        );

        store.append(&sample_referral(2)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with(
            "PAT123456,REF000002,Cardiology,Oncology,\"Suspected mass, needs review\",DOC654321,\"Patient prefers \"\"morning\"\" slots\",2026-01-02 03:04:05,False\r\n"
        ));

        let record = store
            .find_by_id(&ReferralId::from_number(2).unwrap())
            .unwrap();
        assert_eq!(record.patient_id, "PAT123456");
        assert_eq!(record.referral_id, "REF000002");
        assert_eq!(
            store.last_referral_id().unwrap().as_deref(),
            Some("REF000002")
        );
    }

    #[test]
    fn test_append_rejects_wrong_header() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("referrals.csv");
        fs::write(&path, "referral_id,patient_id\n").unwrap();
        let store = ReferralStore::new(&path);

        assert!(matches!(
            store.append(&sample_referral(1)),
            Err(ReferralError::InvalidStructure { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "referral_id,patient_id\n");
    }

    #[test]
    fn test_find_rejects_wrong_header() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("referrals.csv");
        fs::write(&path, "referral_id,patient_id\nREF000001,PAT123456\n").unwrap();
        let store = ReferralStore::new(&path);

        match store.find_by_id(&ReferralId::FIRST) {
            Err(ReferralError::InvalidStructure { found }) => {
                assert_eq!(found, vec!["referral_id", "patient_id"]);
            }
            other => panic!("Expected InvalidStructure, got {:?}", other),
        }
    }

    #[test]
    fn test_find_tolerates_short_rows() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("referrals.csv");
        fs::write(&path, format!("{}\nREF000001,PAT123456\n", header_line())).unwrap();
        let store = ReferralStore::new(&path);

        let record = store.find_by_id(&ReferralId::FIRST).unwrap();
        assert_eq!(record.patient_id, "PAT123456");
        assert_eq!(record.notes, "");
    }

    #[test]
    fn test_last_referral_id() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = ReferralStore::new(temp_dir.path().join("referrals.csv"));

        assert_eq!(store.last_referral_id().unwrap(), None);

        store.initialise().unwrap();
        assert_eq!(store.last_referral_id().unwrap(), None);

        store.append(&sample_referral(1)).unwrap();
        store.append(&sample_referral(2)).unwrap();
        assert_eq!(
            store.last_referral_id().unwrap().as_deref(),
            Some("REF000002")
        );
    }
}
