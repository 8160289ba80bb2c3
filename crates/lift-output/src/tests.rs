//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{TickSummaryRow, TripRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn trip(passenger: u32, exited: Option<u64>) -> TripRow {
        TripRow {
            passenger,
            start:       2,
            origin:      1,
            destination: 6,
            boarded:     Some(5),
            exited,
            wait:        Some(3),
            travel:      exited.map(|e| e - 5),
            completed:   exited.is_some(),
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trips.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["passenger", "start", "origin", "destination", "boarded", "exited", "wait", "travel", "completed"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["tick", "elapsed", "released", "completed", "completed_total", "waiting", "riding"]
        );
    }

    #[test]
    fn trip_rows_written_once_each() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trips(&[trip(0, Some(45)), trip(1, None)]).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("trips.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].iter().collect::<Vec<_>>(),
            ["0", "2", "1", "6", "5", "45", "3", "40", "true"]
        );
        // Undelivered: exit and travel left empty.
        assert_eq!(&rows[1][5], "");
        assert_eq!(&rows[1][7], "");
        assert_eq!(&rows[1][8], "false");
    }

    #[test]
    fn tick_summary_elapsed_is_hms() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let summary = lift_sim::TickSummary {
            released:        1,
            completed:       2,
            completed_total: 7,
            waiting:         4,
            riding:          3,
        };
        w.write_tick_summary(&TickSummaryRow::new(lift_core::Tick(3723), &summary)).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("tick_summaries.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].iter().collect::<Vec<_>>(),
            ["3723", "01:02:03", "1", "2", "7", "4", "3"]
        );
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn missing_dir_is_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use lift_core::{BankConfig, FloorId, Tick};
    use lift_roster::ArrivalRecord;
    use lift_sim::{SimBuilder, Simulation};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{TickSummaryRow, TripRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn one_trip_sim(stall_limit: u64) -> Simulation {
        let config = BankConfig::default()
            .with_floors(10)
            .with_stall_limit(stall_limit)
            .with_progress_interval(0);
        SimBuilder::new(config)
            .arrival(ArrivalRecord::new(Tick(0), FloorId(1), FloorId(5)))
            .build()
            .unwrap()
    }

    #[test]
    fn integration_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, 10);
        let mut sim = one_trip_sim(60_000);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // The run covers ticks 0..=43 → summaries at 0, 10, 20, 30, 40.
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let ticks: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(ticks, ["0", "10", "20", "30", "40"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        let trips: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(trips.len(), 1);
        assert_eq!(
            trips[0].iter().collect::<Vec<_>>(),
            ["0", "0", "1", "5", "0", "40", "0", "40", "true"]
        );
    }

    #[test]
    fn stalled_run_still_writes_trips() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, 0);
        let mut sim = one_trip_sim(5);
        assert!(sim.run(&mut obs).is_err());
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        let trips: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(trips.len(), 1);
        assert_eq!(&trips[0][4], "0"); // boarded
        assert_eq!(&trips[0][5], ""); // never exited
        assert_eq!(&trips[0][8], "false");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0);
    }

    /// Fails every write; counts `finish` calls.
    #[derive(Default)]
    struct BrokenWriter {
        finishes: usize,
    }

    impl OutputWriter for BrokenWriter {
        fn write_trips(&mut self, _rows: &[TripRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("first failure")))
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = SimOutputObserver::new(BrokenWriter::default(), 1);
        let mut sim = one_trip_sim(60_000);
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("first failure"), "{err}");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().finishes, 1);
    }
}
