use tracing::{debug, trace, warn};

use crate::core::{
    ChartConfig, ChartLayout, IdProvider, MergeOptions, ProcessIdProvider, merge_options,
};
use crate::scene::{NodeKind, Scene};

use super::ChartBase;

impl<S: Scene, O: ChartConfig> ChartBase<S, O> {
    /// Mounts a new chart into `container` using the process-wide id provider.
    pub fn new(scene: &mut S, container: S::Node) -> Result<Self, S::Error> {
        Self::with_id_provider(scene, container, &ProcessIdProvider)
    }

    /// Mounts a new chart, creating the root surface under `container` and the
    /// canvas group under the root. Nothing is measured yet.
    pub fn with_id_provider(
        scene: &mut S,
        container: S::Node,
        ids: &dyn IdProvider,
    ) -> Result<Self, S::Error> {
        let id = ids.generate_id();

        let root = scene.create_node(container, NodeKind::Surface)?;
        scene.set_attribute(root, "id", &id.surface_id())?;
        scene.set_attribute(root, "width", "100%")?;
        scene.set_attribute(root, "height", "100%")?;
        scene.set_attribute(root, "style", "display: block")?;

        let canvas = scene.create_node(root, NodeKind::Group)?;
        debug!(chart_id = %id, ?root, ?canvas, "mounted chart scene");

        Ok(Self {
            id,
            container,
            root,
            canvas,
            options: None,
            layout: None,
            width: 0.0,
            height: 0.0,
        })
    }

    /// Resolves `options` over the schema defaults and lays the chart out
    /// against the container's current size.
    pub fn bootstrap(&mut self, scene: &mut S, options: O::Partial) -> Result<(), S::Error> {
        self.bootstrap_with_defaults(scene, O::default_options(), options)
    }

    /// Same as `bootstrap` with caller-provided defaults, used by charts that
    /// override their default options per instance.
    ///
    /// Every call recomputes the layout from scratch, so hosts call it again
    /// after the container is resized. Classes are only ever added: a class
    /// name changed between calls leaves the previous one on the node.
    pub fn bootstrap_with_defaults(
        &mut self,
        scene: &mut S,
        defaults: O,
        options: <O as MergeOptions>::Partial,
    ) -> Result<(), S::Error> {
        let resolved = merge_options(defaults, options);
        let container = scene.measure_bounds(self.container)?;
        let base = resolved.chart_options();
        let layout = ChartLayout::compute(container, &base.padding);

        if layout.drawable.is_negative() {
            warn!(
                chart_id = %self.id,
                width = layout.width(),
                height = layout.height(),
                "padding exceeds container; drawable area is negative"
            );
        }

        scene.add_class(self.root, &base.classes.svg)?;
        scene.set_attribute(self.root, "viewBox", &layout.view_box.to_string())?;
        scene.add_class(self.canvas, &base.classes.canvas)?;
        scene.set_attribute(self.canvas, "transform", &layout.translation.to_string())?;

        debug!(
            chart_id = %self.id,
            container_width = container.width,
            container_height = container.height,
            width = layout.width(),
            height = layout.height(),
            "bootstrapped chart layout"
        );

        self.width = layout.width();
        self.height = layout.height();
        self.layout = Some(layout);
        self.options = Some(resolved);
        Ok(())
    }

    /// Destroys everything drawn into the canvas group. The group itself, its
    /// transform and the root surface are left as they are.
    pub fn reset(&self, scene: &mut S) -> Result<usize, S::Error> {
        let removed = scene.remove_all_children(self.canvas)?;
        trace!(chart_id = %self.id, removed, "reset chart canvas");
        Ok(removed)
    }
}
