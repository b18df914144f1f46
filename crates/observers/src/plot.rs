//! Plotting observer for visualizing the timesteps a run chose.
//!
//! See [`TimestepPlot`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use substep_core::Observer;
use substep_solvers::{timestep::Adaptation, transient::frames::Event};

/// Configuration for rendering a [`TimestepPlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Smoke plume").legend().log_dt())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_dt: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_dt: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each series.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots `log₁₀(dt)` instead of `dt`.
    ///
    /// Useful when the CFL step spans orders of magnitude over a run.
    #[must_use]
    pub fn log_dt(mut self) -> Self {
        self.log_dt = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An observer that records the step taken against simulated time and
/// displays it via egui.
///
/// Each substep contributes one point at `(time_total, dt)`. Substeps whose
/// step was fitted to a frame boundary (snapped, split, or held locked) are
/// also collected into a separate series so frame fitting stands out from
/// the CFL-limited steps.
///
/// Pass `&mut TimestepPlot` to [`frames::run`] so [`show`] can be called
/// after the run completes.
///
/// # Example
///
/// ```ignore
/// let mut plot = TimestepPlot::new();
/// frames::run(&mut clock, &mut fields, 24, &frames::Config::default(), &mut plot)?;
/// plot.show(ShowConfig::new().title("dt per substep").legend())?;
/// ```
///
/// [`frames::run`]: substep_solvers::transient::frames::run
/// [`show`]: TimestepPlot::show
#[derive(Debug, Clone, Default)]
pub struct TimestepPlot {
    steps: Vec<[f64; 2]>,
    fitted: Vec<[f64; 2]>,
    boundaries: Vec<f64>,
}

impl TimestepPlot {
    /// Creates an empty plot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one substep.
    pub fn record(&mut self, event: &Event) {
        let point = [event.time_total, event.dt];
        self.steps.push(point);
        if event.adaptation != Adaptation::Cfl {
            self.fitted.push(point);
        }
        if event.is_frame_boundary() {
            self.boundaries.push(event.time_total);
        }
    }

    /// Opens a blocking egui window displaying the recorded steps.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    plot: self,
                    legend: config.legend,
                    log_dt: config.log_dt,
                }))
            }),
        )
    }
}

impl<A> Observer<Event, A> for TimestepPlot {
    fn observe(&mut self, event: &Event) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut TimestepPlot` to be passed to drivers that take an observer
/// by value, so [`TimestepPlot::show`] can be called after the run completes.
impl<A> Observer<Event, A> for &mut TimestepPlot {
    fn observe(&mut self, event: &Event) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders a recorded run.
struct PlotApp {
    plot: TimestepPlot,
    legend: bool,
    log_dt: bool,
}

impl PlotApp {
    fn transform(&self, points: &[[f64; 2]]) -> PlotPoints {
        if self.log_dt {
            points
                .iter()
                .filter(|p| p[1] > 0.0)
                .map(|p| [p[0], p[1].log10()])
                .collect()
        } else {
            points.iter().copied().collect()
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("timestep_plot").x_axis_label("time");
            plot = plot.y_axis_label(if self.log_dt { "log₁₀ dt" } else { "dt" });
            if self.legend {
                plot = plot.legend(Legend::default());
            }

            let steps = self.transform(&self.plot.steps);
            let fitted = self.transform(&self.plot.fitted);
            let top = self
                .plot
                .steps
                .iter()
                .map(|p| p[1])
                .fold(0.0_f64, f64::max);

            plot.show(ui, |plot_ui| {
                plot_ui.line(Line::new(steps).name("dt"));
                plot_ui.points(Points::new(fitted).radius(3.0).name("fitted to frame"));
                if !self.log_dt {
                    for &t in &self.plot.boundaries {
                        let marker: PlotPoints = vec![[t, 0.0], [t, top]].into_iter().collect();
                        plot_ui.line(Line::new(marker).name("frame boundary"));
                    }
                }
            });
        });
    }
}
