/// Which panel the user is working in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Hide,
    Extract,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Hide => "Hide data",
            Tab::Extract => "Extract data",
        }
    }
}
