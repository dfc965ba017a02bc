use crate::command::{Command, Outcome};
use crate::displacement::TargetPull;
use crate::error::{Error, Result};
use bubbles_core::{ChartConfig, Detail, Mode, ModeCatalog, Node, Record, build_nodes};
use bubbles_render::RenderSync;
use narwhal::{Simulation, Tick};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;

/// A running bubble chart.
///
/// Owns the simulation (and through it every node), the active mode and the renderer. All
/// mutation goes through `&mut self`, so commands are always applied between ticks.
pub struct Chart<R> {
    simulation: Simulation<Node, TargetPull>,
    catalog: ModeCatalog,
    mode: Mode,
    render: R,
    index: FxHashMap<String, usize>,
}

impl<R: RenderSync> Chart<R> {
    /// Builds the nodes from `records`, checks that every mode can place every node, creates
    /// one bubble per node and starts in the default mode.
    pub fn new(records: &[Record], config: &ChartConfig, render: R) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let nodes = build_nodes(records, config, &mut rng)?;
        Self::from_valid_nodes(nodes, config, render)
    }

    /// Like [`Chart::new`] for nodes that are already built and placed.
    pub fn from_nodes(nodes: Vec<Node>, config: &ChartConfig, render: R) -> Result<Self> {
        config.validate()?;
        Self::from_valid_nodes(nodes, config, render)
    }

    // `config` must already be validated.
    fn from_valid_nodes(nodes: Vec<Node>, config: &ChartConfig, mut render: R) -> Result<Self> {
        let catalog = ModeCatalog::from_config(config);
        catalog.validate(&nodes)?;

        let mut index = FxHashMap::default();
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id().to_string(), i).is_some() {
                return Err(Error::DuplicateNode {
                    id: node.id().to_string(),
                });
            }
            render.create_bubble(node);
        }

        let simulation = Simulation::new(nodes, config.force_options())?;
        tracing::info!(nodes = simulation.nodes().len(), "chart ready");

        let mut chart = Self {
            simulation,
            catalog,
            mode: Mode::Default,
            render,
            index,
        };
        chart.apply_mode(Mode::Default)?;
        Ok(chart)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn nodes(&self) -> &[Node] {
        self.simulation.nodes()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index
            .get(id)
            .and_then(|&i| self.simulation.nodes().get(i))
    }

    pub fn catalog(&self) -> &ModeCatalog {
        &self.catalog
    }

    pub fn simulation(&self) -> &Simulation<Node, TargetPull> {
        &self.simulation
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    pub fn into_render(self) -> R {
        self.render
    }

    pub fn is_running(&self) -> bool {
        self.simulation.is_running()
    }

    pub fn alpha(&self) -> f64 {
        self.simulation.alpha()
    }

    /// Applies a toolbar button press. Unknown ids select the default mode.
    pub fn switch_mode(&mut self, trigger: &str) -> Result<Mode> {
        let mode = Mode::from_trigger(trigger);
        self.apply_mode(mode)?;
        Ok(mode)
    }

    /// Stops the layout, swaps labels and pull strategy, then restarts from the current
    /// positions.
    pub fn apply_mode(&mut self, mode: Mode) -> Result<()> {
        let pull = TargetPull::for_mode(&self.catalog, mode, self.simulation.nodes())?;

        self.simulation.stop();
        for layout in self.catalog.layouts() {
            self.render.hide_labels(layout.label_class());
        }
        if let Some(layout) = self.catalog.layout(mode) {
            self.render.show_labels(layout.label_class(), &layout.labels);
        }
        self.simulation.set_displacement(pull);
        self.simulation.start();

        self.render.set_description(mode.description());
        self.render.set_active_trigger(mode.trigger());
        self.mode = mode;
        tracing::debug!(%mode, nodes = self.simulation.nodes().len(), "mode switched");
        Ok(())
    }

    /// One simulation step. Bubbles are moved only when the step advanced.
    pub fn tick(&mut self) -> Tick {
        let tick = self.simulation.tick();
        if let Tick::Advanced { .. } = tick {
            self.render.move_bubbles(self.simulation.nodes());
        }
        tick
    }

    /// Ticks until the layout settles or `max_ticks` steps were applied. Returns the number of
    /// steps applied.
    pub fn run_to_convergence(&mut self, max_ticks: usize) -> usize {
        let render = &mut self.render;
        let ticks = self
            .simulation
            .run(max_ticks, |nodes, _alpha| render.move_bubbles(nodes));
        tracing::debug!(
            mode = %self.mode,
            ticks,
            running = self.simulation.is_running(),
            "layout run finished"
        );
        ticks
    }

    pub fn stop(&mut self) {
        self.simulation.stop();
    }

    pub fn hover_enter(&mut self, id: &str) -> Result<Detail> {
        let detail = self.lookup(id)?.detail().clone();
        self.render.show_detail(id, &detail);
        Ok(detail)
    }

    pub fn hover_exit(&mut self, id: &str) -> Result<()> {
        self.lookup(id)?;
        self.render.hide_detail(id);
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::SwitchMode(trigger) => self.switch_mode(&trigger).map(Outcome::Switched),
            Command::HoverEnter(id) => self.hover_enter(&id).map(Outcome::Detail),
            Command::HoverExit(id) => self.hover_exit(&id).map(|()| Outcome::Cleared),
        }
    }

    fn lookup(&self, id: &str) -> Result<&Node> {
        self.node(id).ok_or_else(|| Error::UnknownNode { id: id.to_string() })
    }
}

impl<R> std::fmt::Debug for Chart<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chart")
            .field("mode", &self.mode)
            .field("nodes", &self.simulation.nodes().len())
            .field("alpha", &self.simulation.alpha())
            .field("running", &self.simulation.is_running())
            .finish()
    }
}
