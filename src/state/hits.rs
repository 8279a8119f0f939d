use ratatui::layout::Rect;

use pd_catalog::View;

/// Screen regions recorded by the renderer each frame so the mouse handler
/// can map clicks back to UI elements. Cleared at the start of every render.
#[derive(Default)]
pub struct HitMap {
    /// Tab label regions in the header.
    pub tabs: Vec<(Rect, View)>,
    /// Category label regions in the sidebar.
    pub categories: Vec<(Rect, String)>,
    /// Card regions, paired with their index into the filtered sequence.
    pub cards: Vec<(Rect, usize)>,
    /// Number of card columns in the current grid layout.
    pub grid_cols: usize,
    /// The detail overlay pane, when open. Clicks outside it close the
    /// overlay.
    pub overlay: Option<Rect>,
    /// The `[x]` close control in the overlay title.
    pub close_button: Option<Rect>,
    /// Prompt detail: the Run and Clear controls.
    pub run_button: Option<Rect>,
    pub clear_button: Option<Rect>,
    /// Prompt detail: one region per variable input field.
    pub inputs: Vec<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.tabs.clear();
        self.categories.clear();
        self.cards.clear();
        self.grid_cols = 0;
        self.overlay = None;
        self.close_button = None;
        self.run_button = None;
        self.clear_button = None;
        self.inputs.clear();
    }
}
