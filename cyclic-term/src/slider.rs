//! A cyclic slider mounted in a terminal layout.

use std::path::Path;

use anyhow::{Context, Result};
use ratatui::layout::Rect;

use cyclic_core::{CyclicSlider, NumberField, SliderConfig};

use crate::surface::TerminalSurface;

/// Which half of the widget receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Track,
    Field,
}

/// Value model, its text box, and display metadata.
pub struct TermSlider {
    pub(crate) model: CyclicSlider<TerminalSurface>,
    pub(crate) field: NumberField,
    pub focus: Focus,
    config: SliderConfig,
    /// Value shown before the current text edit began.
    edit_origin: Option<f64>,
}

impl TermSlider {
    /// Mount from config with the track at `area`. Callbacks are attached
    /// with [`on_input`](Self::on_input) and [`on_change`](Self::on_change).
    pub fn from_config(config: SliderConfig, area: Rect) -> Result<Self> {
        let model = config
            .build(TerminalSurface::new(area))
            .context("invalid slider config")?;
        let field = NumberField::new(model.value(), config.step);
        Ok(Self {
            model,
            field,
            focus: Focus::default(),
            config,
            edit_origin: None,
        })
    }

    /// Read a TOML config file and mount it.
    pub fn load(path: &Path, area: Rect) -> Result<Self> {
        let config = SliderConfig::load(path)
            .with_context(|| format!("loading slider config {}", path.display()))?;
        Self::from_config(config, area)
    }

    pub fn on_input(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.model = self.model.on_input(f);
        self
    }

    pub fn on_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.model = self.model.on_change(f);
        self
    }

    pub fn value(&self) -> f64 {
        self.model.value()
    }

    pub fn model(&self) -> &CyclicSlider<TerminalSurface> {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut CyclicSlider<TerminalSurface> {
        &mut self.model
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Text currently shown in the numeric box.
    pub fn field_text(&self) -> &str {
        self.field.text()
    }

    pub fn is_editing(&self) -> bool {
        self.field.is_editing()
    }

    /// New layout position for the track.
    pub fn set_area(&mut self, area: Rect) {
        log::debug!("slider track moved to {area:?}");
        self.model.surface_mut().set_area(area);
    }

    /// Owner-supplied value; ignored mid-drag.
    pub fn reconcile(&mut self, external: f64) -> bool {
        let changed = self.model.reconcile(external);
        if changed {
            self.sync_field();
        }
        changed
    }

    /// `"Heading: 45°"` for the current value.
    pub fn readout(&self) -> String {
        self.config.readout(self.model.value())
    }

    pub(crate) fn sync_field(&mut self) {
        self.field.sync(self.model.value(), self.config.step);
    }

    /// Remember the value to restore if the edit about to start is abandoned.
    pub(crate) fn begin_edit(&mut self) {
        if !self.field.is_editing() {
            self.edit_origin = Some(self.model.value());
        }
    }

    /// Blur/Enter: leave editing and commit the typed number, if any.
    pub(crate) fn finish_edit(&mut self) {
        if !self.field.is_editing() {
            return;
        }
        self.edit_origin = None;
        if let Some(raw) = self.field.finish() {
            self.model.commit(raw);
        }
        self.sync_field();
    }

    /// Esc: leave editing and put back the value from before the edit.
    pub(crate) fn abandon_edit(&mut self) {
        if let Some(origin) = self.edit_origin.take() {
            if origin != self.model.value() {
                self.model.input(origin);
            }
        }
        self.field.abandon(self.model.value(), self.config.step);
    }
}
