//! Integration tests for taxi-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SCORES_FILE, SUMMARIES_FILE};
    use crate::row::{AgentScoreRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn score_row(agent: &str, tick: u64, score: i64) -> AgentScoreRow {
        AgentScoreRow {
            tick,
            agent:    agent.to_owned(),
            team:     agent.chars().next().unwrap(),
            mode:     "ROAM".to_owned(),
            x:        2,
            y:        3,
            score,
            on_board: 0,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join(SCORES_FILE)),
            ["tick", "agent", "team", "mode", "x", "y", "score", "on_board"]
        );
        assert_eq!(headers(dir.path().join(SUMMARIES_FILE)), ["tick", "live_clients"]);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(SCORES_FILE).exists());
        assert!(nested.join(SUMMARIES_FILE).exists());
    }

    #[test]
    fn score_rows_read_back() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_scores(&[score_row("R0", 5, -4), score_row("D1", 5, 17)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SCORES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5"); // tick
        assert_eq!(&rows[0][1], "R0");
        assert_eq!(&rows[0][3], "ROAM");
        assert_eq!(&rows[0][6], "-4"); // score
        assert_eq!(&rows[1][2], "D");
        assert_eq!(&rows[1][4], "2"); // x
        assert_eq!(&rows[1][5], "3"); // y
        assert_eq!(&rows[1][7], "0"); // on_board
    }

    #[test]
    fn tick_summary_read_back() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 3, live_clients: 7 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "7");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_scores(&[]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use taxi_core::{Coords, SimConfig, Team};
    use taxi_grid::{BfsRouter, Grid};
    use taxi_sim::SimBuilder;

    use crate::csv::{CsvWriter, SCORES_FILE, SUMMARIES_FILE};
    use crate::observer::SimOutputObserver;
    use crate::row::AgentScoreRow;
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, TickSummaryRow};

    /// Collects rows in memory.
    #[derive(Default)]
    struct MemWriter {
        scores:    Vec<AgentScoreRow>,
        summaries: Vec<TickSummaryRow>,
        finished:  u32,
    }

    impl OutputWriter for MemWriter {
        fn write_scores(&mut self, rows: &[AgentScoreRow]) -> OutputResult<()> {
            self.scores.extend_from_slice(rows);
            Ok(())
        }
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Fails every summary write with a numbered I/O error.
    #[derive(Default)]
    struct FailingWriter {
        failures: u32,
    }

    impl OutputWriter for FailingWriter {
        fn write_scores(&mut self, _rows: &[AgentScoreRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.failures += 1;
            Err(std::io::Error::other(format!("failure {}", self.failures)).into())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn config() -> SimConfig {
        SimConfig {
            total_ticks:           6,
            seed:                  1,
            max_clients:           3,
            output_interval_ticks: 2,
        }
    }

    #[test]
    fn rows_follow_the_run() {
        let mut sim = SimBuilder::new(config(), Grid::standard().unwrap(), BfsRouter::new())
            .team(Team::Rooster, 2)
            .team(Team::Donkey, 1)
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        let w = obs.into_writer();

        // Snapshots at ticks 0, 2 and 4 for three agents.
        assert_eq!(w.scores.len(), 9);
        assert_eq!(w.summaries.len(), 6);
        assert_eq!(w.finished, 1);
        assert!(w.summaries.iter().all(|s| s.live_clients <= 3));

        let last: Vec<_> = w.scores.iter().filter(|r| r.tick == 4).collect();
        assert_eq!(last.len(), 3);
        assert_eq!(last[0].agent, "R0");
        assert_eq!(last[2].team, 'D');
    }

    #[test]
    fn keeps_first_error() {
        let mut sim = SimBuilder::new(config(), Grid::standard().unwrap(), BfsRouter::new())
            .team(Team::Rooster, 1)
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter::default());
        sim.run(&mut obs).unwrap();

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "failure 1"),
            other => panic!("expected the first I/O error, got {other:?}"),
        }
        assert!(obs.take_error().is_none(), "error is taken once");
        assert_eq!(obs.into_writer().failures, 6, "later ticks still reach the writer");
    }

    #[test]
    fn writes_csv_files() {
        let mut sim = SimBuilder::new(config(), Grid::standard().unwrap(), BfsRouter::new())
            .team(Team::Rooster, 1)
            .team(Team::Donkey, 1)
            .initial_positions(vec![Coords::new(1, 1).unwrap(), Coords::new(3, 3).unwrap()])
            .build()
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join(SCORES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);

        let final_row = rows.last().unwrap();
        assert_eq!(&final_row[0], "4");
        assert_eq!(&final_row[1], "D0");
        assert!(final_row[6].parse::<i64>().is_ok());

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 6);
    }
}
