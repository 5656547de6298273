use ratatui::layout::{Rect, Size};

use crate::core::system_monitor::ResourceKind;

/// Screen corner a panel occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Quadrant for a resource: CPU and GPU on top, RAM and storage below
    pub fn for_resource(resource: ResourceKind) -> Self {
        match resource {
            ResourceKind::Cpu => Quadrant::TopLeft,
            ResourceKind::Gpu => Quadrant::TopRight,
            ResourceKind::Memory => Quadrant::BottomLeft,
            ResourceKind::Disk => Quadrant::BottomRight,
        }
    }
}

/// A fixed screen region bound to one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub resource: ResourceKind,
    pub title: &'static str,
    pub area: Rect,
}

impl Panel {
    /// Rows available for text inside the border
    pub fn interior_height(&self) -> u16 {
        self.area.height.saturating_sub(2)
    }

    pub fn interior_width(&self) -> u16 {
        self.area.width.saturating_sub(2)
    }
}

/// The four panels, computed once at startup
///
/// Terminal resizes are not tracked; panels keep the geometry they were
/// created with and are clipped to the frame when drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    panels: [Panel; 4],
}

impl PanelLayout {
    /// Split a screen into four half-height, half-width quadrants
    pub fn quadrants(size: Size) -> Self {
        let half_height = size.height / 2;
        let half_width = size.width / 2;

        let panels = ResourceKind::ALL.map(|resource| {
            let (x, y) = match Quadrant::for_resource(resource) {
                Quadrant::TopLeft => (0, 0),
                Quadrant::TopRight => (half_width, 0),
                Quadrant::BottomLeft => (0, half_height),
                Quadrant::BottomRight => (half_width, half_height),
            };

            Panel {
                resource,
                title: resource.title(),
                area: Rect::new(x, y, half_width, half_height),
            }
        });

        Self { panels }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    #[cfg(test)]
    pub fn panel(&self, resource: ResourceKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.resource == resource)
    }
}
