use tracing::{debug, trace};

use crate::core::{Dataset, RangeFilter, ViewMode, ViewState};
use crate::error::ChartResult;
use crate::render::RenderFrame;

use super::{
    BarChartRenderer, ChartStyle, ChartsConfig, LineChartRenderer, MoneyFormat, ThemeConfig,
};

/// Identifier of the embedded dataset payload on the host page.
pub const DATA_PAYLOAD_ID: &str = "lc_data";

/// Root attribute whose mutation signals a theme switch.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Container regions the charts are drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    MonthlyChart,
    CumulativeChart,
}

impl MountPoint {
    pub const ALL: [MountPoint; 2] = [MountPoint::MonthlyChart, MountPoint::CumulativeChart];

    /// Stable external identifier of the container.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            MountPoint::MonthlyChart => "lc_chart_monthly",
            MountPoint::CumulativeChart => "lc_chart_cumulative",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mount| mount.id() == id)
    }
}

/// Presentation surface the controller reads inputs from and draws into.
pub trait ChartHost {
    /// Raw dataset payload text, if the page embeds one.
    fn data_payload(&self) -> Option<String>;

    /// Current container width, or `None` when the mount point does not exist.
    fn mount_width(&self, mount: MountPoint) -> Option<u32>;

    /// Value of a named theme property, if set.
    fn theme_property(&self, name: &str) -> Option<String>;

    /// Discards whatever `mount` shows and displays `frame` instead.
    fn replace_mount(&mut self, mount: MountPoint, frame: RenderFrame);
}

/// One toggle control, identified by the state value it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Range(RangeFilter),
    View(ViewMode),
}

impl Toggle {
    /// Toggles described by a button's `data-range` / `data-view` attribute values.
    ///
    /// Unknown values are dropped.
    pub fn from_attributes(
        range: Option<&str>,
        view: Option<&str>,
    ) -> impl Iterator<Item = Toggle> {
        let range = range
            .and_then(RangeFilter::from_attribute)
            .map(Toggle::Range);
        let view = view.and_then(ViewMode::from_attribute).map(Toggle::View);
        range.into_iter().chain(view)
    }
}

/// External triggers the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartEvent {
    Toggle(Toggle),
    /// A toggle button was clicked; carries its raw attribute values.
    ButtonClicked {
        range: Option<String>,
        view: Option<String>,
    },
    Resize,
    RootAttributeChanged(String),
}

/// Owns the view state and redraws both charts on every trigger.
///
/// Every pass re-reads the payload and theme from the host and rebuilds both
/// frames from scratch.
pub struct ChartController<H: ChartHost> {
    host: H,
    config: ChartsConfig,
    money: MoneyFormat,
    state: ViewState,
    render_passes: u64,
}

impl<H: ChartHost> ChartController<H> {
    /// Validates `config`, then performs the initial render.
    pub fn start(host: H, config: ChartsConfig) -> ChartResult<Self> {
        let money = MoneyFormat::new(config.money_format);
        Self::start_with_money_format(host, config, money)
    }

    pub fn start_with_money_format(
        host: H,
        config: ChartsConfig,
        money: MoneyFormat,
    ) -> ChartResult<Self> {
        let config = config.validate()?;
        let mut controller = Self {
            host,
            config,
            money,
            state: ViewState::default(),
            render_passes: 0,
        };
        controller.render_all();
        Ok(controller)
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &ChartsConfig {
        &self.config
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access for changing inputs; call a trigger afterwards to redraw.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Completed render passes, the initial one included. Skipped passes are not counted.
    #[must_use]
    pub fn render_passes(&self) -> u64 {
        self.render_passes
    }

    /// Pressed flag for `toggle`, derived from the current state.
    #[must_use]
    pub fn is_pressed(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Range(range) => self.state.range == range,
            Toggle::View(view) => self.state.view == view,
        }
    }

    pub fn handle(&mut self, event: ChartEvent) {
        match event {
            ChartEvent::Toggle(toggle) => self.on_toggle(toggle),
            ChartEvent::ButtonClicked { range, view } => {
                self.on_button_click(range.as_deref(), view.as_deref());
            }
            ChartEvent::Resize => self.on_resize(),
            ChartEvent::RootAttributeChanged(name) => self.on_root_attribute_changed(&name),
        }
    }

    pub fn on_toggle(&mut self, toggle: Toggle) {
        self.apply(toggle);
        self.render_all();
    }

    /// Applies every recognized attribute on the clicked button, then redraws.
    pub fn on_button_click(&mut self, range: Option<&str>, view: Option<&str>) {
        for toggle in Toggle::from_attributes(range, view) {
            self.apply(toggle);
        }
        self.render_all();
    }

    pub fn on_resize(&mut self) {
        self.render_all();
    }

    /// Redraws when the theme attribute changed; other attributes are ignored.
    pub fn on_root_attribute_changed(&mut self, name: &str) {
        if name == THEME_ATTRIBUTE {
            self.render_all();
        } else {
            trace!(attribute = name, "ignoring root attribute change");
        }
    }

    /// Rebuilds both charts from the host's current inputs.
    ///
    /// Returns `false` without touching either mount when one of them is missing.
    pub fn render_all(&mut self) -> bool {
        let dataset = Dataset::from_payload(self.host.data_payload().as_deref());
        let rows = self.state.range.apply(&dataset.monthly);

        let (Some(monthly_width), Some(cumulative_width)) = (
            self.host.mount_width(MountPoint::MonthlyChart),
            self.host.mount_width(MountPoint::CumulativeChart),
        ) else {
            debug!("chart mount point missing; skipping render");
            return false;
        };

        let theme = ThemeConfig::from_lookup(|name| self.host.theme_property(name));
        let style = ChartStyle::new(&self.config, &theme, &self.money);
        let monthly = BarChartRenderer::new(style).render(
            rows,
            &dataset.currency,
            self.state.view,
            monthly_width,
        );
        let cumulative =
            LineChartRenderer::new(style).render(rows, &dataset.currency, cumulative_width);

        self.host.replace_mount(MountPoint::MonthlyChart, monthly);
        self.host.replace_mount(MountPoint::CumulativeChart, cumulative);
        self.render_passes += 1;

        debug!(
            range = self.state.range.as_attribute(),
            view = self.state.view.as_attribute(),
            rows = rows.len(),
            monthly_width,
            cumulative_width,
            "charts rendered"
        );
        true
    }

    fn apply(&mut self, toggle: Toggle) {
        match toggle {
            Toggle::Range(range) => self.state.range = range,
            Toggle::View(view) => self.state.view = view,
        }
    }
}

impl<H: ChartHost + std::fmt::Debug> std::fmt::Debug for ChartController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartController")
            .field("host", &self.host)
            .field("state", &self.state)
            .field("render_passes", &self.render_passes)
            .finish_non_exhaustive()
    }
}
