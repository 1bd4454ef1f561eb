//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{LiftEventKind, LiftEventRow, LiftSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(lift: u32, tick: u64) -> LiftSnapshotRow {
        LiftSnapshotRow {
            tick,
            elapsed_ms:    tick * 1_000,
            lift,
            current_floor: lift + 2,
            direction:     "up",
            is_moving:     true,
            request_queue: "5 2".to_owned(),
        }
    }

    fn read_all(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("lift_snapshots.csv").exists());
        assert!(dir.path().join("lift_events.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("lift_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["tick", "elapsed_ms", "lift", "current_floor", "direction", "is_moving", "request_queue"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("lift_events.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "elapsed_ms", "event", "lift", "from_floor", "floor"]);
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let rows = read_all(dir.path().join("lift_snapshots.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5");      // tick
        assert_eq!(&rows[0][1], "5000");   // elapsed_ms
        assert_eq!(&rows[0][2], "1");      // lift
        assert_eq!(&rows[0][3], "3");      // current_floor
        assert_eq!(&rows[0][4], "up");
        assert_eq!(&rows[0][5], "1");      // is_moving
        assert_eq!(&rows[0][6], "5 2");
        assert_eq!(&rows[1][2], "2");
    }

    #[test]
    fn csv_rejection_has_empty_lift() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&LiftEventRow {
            tick:       2,
            elapsed_ms: 2_000,
            event:      LiftEventKind::Rejected,
            lift:       None,
            from_floor: None,
            floor:      0,
        })
        .unwrap();
        w.write_event(&LiftEventRow {
            tick:       3,
            elapsed_ms: 3_000,
            event:      LiftEventKind::Departed,
            lift:       Some(2),
            from_floor: Some(1),
            floor:      6,
        })
        .unwrap();
        w.finish().unwrap();

        let rows = read_all(dir.path().join("lift_events.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "rejected");
        assert_eq!(&rows[0][3], "");
        assert_eq!(&rows[0][4], "");
        assert_eq!(&rows[1][2], "departed");
        assert_eq!(&rows[1][3], "2");
        assert_eq!(&rows[1][4], "1");
        assert_eq!(&rows[1][5], "6");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("absent")).is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use lift_core::{FleetConfig, Floor, Tick};
    use lift_sim::{HallCall, RequestScript, SimBuilder, SimObserver};

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{LiftEventRow, LiftSnapshotRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config() -> FleetConfig {
        FleetConfig {
            total_floors:          8,
            lift_count:            1,
            travel_ticks:          2,
            tick_duration_ms:      500,
            output_interval_ticks: 1,
        }
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(config()).build().unwrap();
        let script = RequestScript::new(vec![
            HallCall { tick: Tick(0), floor: Floor(3) },
            HallCall { tick: Tick(0), floor: Floor(5) },
            HallCall { tick: Tick(0), floor: Floor(9) },
        ]);

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, sim.config());
        sim.run_script(&script, &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Ticks 1..=4, one lift each.
        let mut rdr = csv::Reader::from_path(dir.path().join("lift_snapshots.csv")).unwrap();
        let snaps: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(snaps.len(), 4);
        assert_eq!(&snaps[3][0], "4");
        assert_eq!(&snaps[3][1], "2000");
        assert_eq!(&snaps[3][3], "5");
        assert_eq!(&snaps[3][4], "idle");

        let mut rdr = csv::Reader::from_path(dir.path().join("lift_events.csv")).unwrap();
        let events: Vec<(String, String)> = rdr
            .records()
            .map(|r| r.unwrap())
            .map(|r| (r[2].to_owned(), r[5].to_owned()))
            .collect();
        let expected = [
            ("assigned", "3"),
            ("departed", "3"),
            ("assigned", "5"),
            ("rejected", "9"),
            ("arrived", "3"),
            ("departed", "5"),
            ("arrived", "5"),
        ];
        let expected: Vec<(String, String)> = expected
            .iter()
            .map(|(e, f)| (e.to_string(), f.to_string()))
            .collect();
        assert_eq!(events, expected);
    }

    /// Writer whose every call fails.
    struct Broken {
        calls: usize,
    }

    impl OutputWriter for Broken {
        fn write_snapshots(&mut self, _rows: &[LiftSnapshotRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_event(&mut self, _row: &LiftEventRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_kept() {
        let mut sim = SimBuilder::new(config()).build().unwrap();
        let mut obs = SimOutputObserver::new(Broken { calls: 0 }, sim.config());

        sim.submit_request_observed(Floor(4), &mut obs).unwrap();
        sim.run_until_idle(10, &mut obs).unwrap();
        obs.on_sim_end(sim.now());

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().calls > 1, "writes continue after a failure");
    }
}
