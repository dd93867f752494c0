use crate::content::{SidebarFile, TabKind};

/// Open editor tabs and the explorer sidebar.
///
/// The sidebar never stores its own notion of the "current" file; the
/// highlighted entry is derived from the active tab.
#[derive(Debug, Clone)]
pub struct Workbench {
    files: Vec<SidebarFile>,
    tabs: Vec<TabKind>,
    active: Option<usize>,
    /// Keyboard cursor in the explorer
    cursor: usize,
    sidebar_visible: bool,
    folder_open: bool,
}

impl Workbench {
    pub fn new(files: Vec<SidebarFile>) -> Self {
        Self {
            files,
            tabs: Vec::new(),
            active: None,
            cursor: 0,
            sidebar_visible: true,
            folder_open: true,
        }
    }

    pub fn files(&self) -> &[SidebarFile] {
        &self.files
    }

    pub fn tabs(&self) -> &[TabKind] {
        &self.tabs
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_tab(&self) -> Option<TabKind> {
        self.active.and_then(|i| self.tabs.get(i).copied())
    }

    /// Open a tab, or focus it if it is already open
    pub fn open(&mut self, tab: TabKind) {
        let index = match self.tabs.iter().position(|t| *t == tab) {
            Some(i) => i,
            None => {
                self.tabs.push(tab);
                self.tabs.len() - 1
            }
        };
        self.active = Some(index);
        if let Some(file) = self.files.iter().position(|f| f.tab == tab) {
            self.cursor = file;
        }
    }

    pub fn close(&mut self, tab: TabKind) {
        let Some(index) = self.tabs.iter().position(|t| *t == tab) else {
            return;
        };
        self.tabs.remove(index);
        self.active = match self.active {
            _ if self.tabs.is_empty() => None,
            Some(a) if a == index => Some(index.saturating_sub(1)),
            Some(a) if a > index => Some(a - 1),
            other => other,
        };
    }

    pub fn close_active(&mut self) {
        if let Some(tab) = self.active_tab() {
            self.close(tab);
        }
    }

    pub fn next_tab(&mut self) {
        if let Some(a) = self.active {
            self.active = Some((a + 1) % self.tabs.len());
        }
    }

    pub fn prev_tab(&mut self) {
        if let Some(a) = self.active {
            self.active = Some((a + self.tabs.len() - 1) % self.tabs.len());
        }
    }

    pub fn activate_index(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = Some(index);
        }
    }

    /// Whether a sidebar entry is the file behind the active tab
    pub fn is_active_file(&self, file: &SidebarFile) -> bool {
        self.active_tab() == Some(file.tab)
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    pub fn folder_open(&self) -> bool {
        self.folder_open
    }

    pub fn toggle_folder(&mut self) {
        self.folder_open = !self.folder_open;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.files.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Open the file under the explorer cursor
    pub fn open_selected(&mut self) -> Option<TabKind> {
        if !self.folder_open {
            self.folder_open = true;
            return None;
        }
        let tab = self.files.get(self.cursor)?.tab;
        self.open(tab);
        Some(tab)
    }

    /// Open the n-th sidebar file (welcome-screen cards, mouse clicks)
    pub fn open_file(&mut self, index: usize) -> Option<TabKind> {
        let tab = self.files.get(index)?.tab;
        self.open(tab);
        Some(tab)
    }
}
