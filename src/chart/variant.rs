use crate::core::{ChartConfig, MergeOptions};
use crate::scene::Scene;

use super::ChartBase;

/// Capability contract implemented by concrete chart types (line, bar, pie...).
///
/// Implementors compose a `ChartBase` and only provide rendering; options
/// resolution, layout and canvas clearing come from the provided methods.
pub trait Chart<S: Scene> {
    type Options: ChartConfig;
    type Data: ?Sized;

    fn base(&self) -> &ChartBase<S, Self::Options>;

    fn base_mut(&mut self) -> &mut ChartBase<S, Self::Options>;

    /// Defaults the caller's options are merged over. Override to extend the
    /// schema defaults for a single chart type or instance.
    fn default_options(&self) -> Self::Options {
        <Self::Options as ChartConfig>::default_options()
    }

    /// Draws `data` into `self.base().canvas()` using the drawable
    /// `width`/`height`, with coordinates relative to the canvas origin.
    fn render(&mut self, scene: &mut S, data: &Self::Data) -> Result<(), S::Error>;

    fn bootstrap(
        &mut self,
        scene: &mut S,
        options: <Self::Options as MergeOptions>::Partial,
    ) -> Result<(), S::Error> {
        let defaults = self.default_options();
        self.base_mut().bootstrap_with_defaults(scene, defaults, options)
    }

    fn reset(&mut self, scene: &mut S) -> Result<usize, S::Error> {
        self.base().reset(scene)
    }

    /// Clears the canvas and renders `data` again without re-running layout.
    fn redraw(&mut self, scene: &mut S, data: &Self::Data) -> Result<(), S::Error> {
        self.reset(scene)?;
        self.render(scene, data)
    }
}
