//! Integration tests for gt-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentFrameRow, PlanPassRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn frame_row(agent_id: u32, frame: u64, moving: bool) -> AgentFrameRow {
        AgentFrameRow {
            frame,
            agent_id,
            team:     (agent_id % 2) as u8,
            x:        agent_id as f32 * 1.2,
            z:        -0.6,
            yaw:      0.0,
            moving,
            dest_col: if moving { 3 } else { -1 },
            dest_row: if moving { 4 } else { -1 },
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_frames.csv").exists());
        assert!(dir.path().join("plan_passes.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_frames.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["frame", "agent_id", "team", "x", "z", "yaw", "moving", "dest_col", "dest_row"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("plan_passes.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["frame", "assigned", "moving", "relocated", "degraded"]);
    }

    #[test]
    fn agent_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_agent_frames(&[frame_row(0, 15, true), frame_row(1, 15, false)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_frames.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "15");     // frame
        assert_eq!(&rows[0][6], "1");      // moving
        assert_eq!(&rows[0][7], "3");      // dest_col
        assert_eq!(&rows[1][1], "1");      // agent_id
        assert_eq!(&rows[1][3], "1.2000"); // x
        assert_eq!(&rows[1][8], "-1");     // dest_row while idle
    }

    #[test]
    fn plan_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_plan_pass(&PlanPassRow { frame: 30, assigned: 6, moving: 4, relocated: 1, degraded: 0 })
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("plan_passes.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "30");
        assert_eq!(&rows[0][3], "1");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use gt_agent::AgentStoreBuilder;
    use gt_core::{BoardConfig, Cell, SimConfig, TeamId};
    use gt_sim::{SimBuilder, SimObserver};
    use gt_spatial::{AStarSearch, CoordinateMapper};

    use crate::row::{AgentFrameRow, PlanPassRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, SimOutputObserver};

    /// Collects rows in memory.
    #[derive(Default)]
    struct Recorder {
        frames:   Vec<AgentFrameRow>,
        passes:   Vec<PlanPassRow>,
        finished: u32,
    }

    impl OutputWriter for Recorder {
        fn write_agent_frames(&mut self, rows: &[AgentFrameRow]) -> OutputResult<()> {
            self.frames.extend_from_slice(rows);
            Ok(())
        }
        fn write_plan_pass(&mut self, row: &PlanPassRow) -> OutputResult<()> {
            self.passes.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Fails every write.
    struct Broken;

    impl OutputWriter for Broken {
        fn write_agent_frames(&mut self, _rows: &[AgentFrameRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_plan_pass(&mut self, _row: &PlanPassRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("first")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn duel_sim(total_frames: u64) -> gt_sim::Sim<AStarSearch> {
        let mapper = CoordinateMapper::from_config(&BoardConfig::default()).unwrap();
        let agents = AgentStoreBuilder::new()
            .agent(TeamId(0), mapper.grid_to_world(Cell::new(0, 0)), 1.0)
            .agent(TeamId(1), mapper.grid_to_world(Cell::new(0, 5)), 1.0)
            .build();
        let config = SimConfig { total_frames, ..SimConfig::default() };
        SimBuilder::new(config, agents, AStarSearch).build().unwrap()
    }

    #[test]
    fn observer_records_plans_and_snapshots() {
        let mut sim = duel_sim(30);
        let mut obs = SimOutputObserver::new(Recorder::default());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let rec = obs.into_writer();
        assert_eq!(rec.passes.len(), 2);
        assert_eq!(rec.passes[0].frame, 0);
        assert_eq!(rec.passes[0].assigned, 2);
        assert_eq!(rec.passes[0].moving, 2);
        assert_eq!(rec.frames.len(), 4); // 2 units × frames 0 and 15
        assert!(rec.frames[0].moving);
        assert_eq!((rec.frames[0].dest_col, rec.frames[0].dest_row), (0, 1));
        assert_eq!(rec.finished, 1);
    }

    #[test]
    fn removed_units_are_not_written() {
        let mut sim = duel_sim(1);
        sim.remove_agent(gt_core::AgentId(1));
        let mut obs = SimOutputObserver::new(Recorder::default());
        sim.run(&mut obs).unwrap();
        let rec = obs.into_writer();
        assert_eq!(rec.frames.len(), 1);
        assert_eq!(rec.frames[0].agent_id, 0);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = duel_sim(1);
        let mut obs = SimOutputObserver::new(Broken);
        sim.run(&mut obs).unwrap();
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("first"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_backend_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = duel_sim(60);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        obs.on_sim_end(sim.frame());
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("plan_passes.csv")).unwrap();
        assert_eq!(rdr.records().count(), 4);
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_frames.csv")).unwrap();
        assert_eq!(rdr.records().count(), 8);
    }
}
