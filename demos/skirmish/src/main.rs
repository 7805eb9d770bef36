//! skirmish — two squads closing to melee range on the stock 8×8 board.
//!
//! Usage: `skirmish [config.json] [output_dir]`
//!
//! The optional JSON file is a (partial) `SimConfig`; missing fields take
//! their defaults.  Logging goes through `env_logger`, so
//! `RUST_LOG=gt_planner=debug` shows every planning pass.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use gt_agent::{AgentStore, AgentStoreBuilder};
use gt_core::{Frame, SimConfig, SimRng, TeamId};
use gt_mobility::{Arrival, MobilityStore};
use gt_output::{CsvWriter, OutputWriter, SimOutputObserver};
use gt_planner::PlanReport;
use gt_sim::{SimBuilder, SimObserver};
use gt_spatial::{AStarSearch, CoordinateMapper};

// ── Constants ─────────────────────────────────────────────────────────────────

const UNITS_PER_TEAM: usize = 6;
const BLUE:           TeamId = TeamId(0);
const RED:            TeamId = TeamId(1);
const SPEED_RANGE:    (f32, f32) = (0.8, 1.4); // cells per second

// ── Observer wrapper to count events ─────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:    SimOutputObserver<W>,
    passes:   usize,
    degraded: usize,
    arrivals: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, passes: 0, degraded: 0, arrivals: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_plan(&mut self, frame: Frame, report: &PlanReport) {
        self.passes += 1;
        self.degraded += report.degraded_count();
        self.inner.on_plan(frame, report);
    }

    fn on_arrivals(&mut self, _frame: Frame, arrivals: &[Arrival]) {
        self.arrivals += arrivals.len();
    }

    fn on_snapshot(&mut self, frame: Frame, agents: &AgentStore, mobility: &MobilityStore) {
        self.inner.on_snapshot(frame, agents, mobility);
    }

    fn on_sim_end(&mut self, final_frame: Frame) {
        self.inner.on_sim_end(final_frame);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

/// Blue deploys on the first rows, red on the last rows, at random cells.
/// Each team draws from its own child stream of `rng`.  Duplicates are
/// allowed; the first planning pass spreads them out.
fn deploy(config: &SimConfig, rng: &mut SimRng) -> Result<AgentStore> {
    let mapper = CoordinateMapper::from_config(&config.board)?;
    let dims   = mapper.dims();
    let depth  = (dims.rows as i32 / 3).max(1);

    let mut builder = AgentStoreBuilder::with_capacity(UNITS_PER_TEAM * 2);
    for (team, rows) in [(BLUE, 0..depth), (RED, dims.rows as i32 - depth..dims.rows as i32)] {
        let mut team_rng = rng.child(team.0 as u64);
        for _ in 0..UNITS_PER_TEAM {
            let cell  = team_rng.cell_in_rows(dims, rows.clone());
            let speed = team_rng.gen_range(SPEED_RANGE.0..SPEED_RANGE.1);
            builder = builder.agent(team, mapper.grid_to_world(cell), speed);
        }
    }
    Ok(builder.build())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args   = std::env::args().skip(1);
    let config_arg = args.next().map(PathBuf::from);
    let out_dir    = args.next().map_or_else(|| PathBuf::from("output/skirmish"), PathBuf::from);

    let config = load_config(config_arg.as_deref())?;
    config.validate()?;
    log::info!(
        "board {}x{} cell {} | {} frames at {:.4}s, plan every {}",
        config.board.columns,
        config.board.rows,
        config.board.cell_size,
        config.total_frames,
        config.frame_dt_secs,
        config.plan_interval_frames,
    );

    // 1. Deploy both squads.
    let mut rng = SimRng::new(config.seed);
    let agents  = deploy(&config, &mut rng)?;

    // 2. Build sim.
    let mut sim = SimBuilder::new(config.clone(), agents, AStarSearch).build()?;

    // 3. Set up output.
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let writer  = CsvWriter::new(&out_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        log::error!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  planning passes : {}", obs.passes);
    println!("  arrivals        : {}", obs.arrivals);
    println!("  degraded holds  : {}", obs.degraded);
    println!("  traces          : {}", out_dir.display());
    println!();

    println!("{:<8} {:<6} {:<10} {:<8}", "Unit", "Team", "Cell", "Engaged");
    println!("{}", "-".repeat(34));
    for view in sim.list_live_agents() {
        println!(
            "{:<8} {:<6} {:<10} {:<8}",
            view.id.0,
            view.team.0,
            sim.mapper.world_to_grid(view.position).to_string(),
            if sim.is_adjacent_to_nearest_opponent(view.id) { "yes" } else { "no" },
        );
    }

    Ok(())
}
