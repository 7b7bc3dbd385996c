/// Fixed set of tool names a view is interested in.
#[derive(Debug, Clone, Copy)]
pub struct AllowList {
    names: &'static [&'static str],
}

impl AllowList {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name)
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }
}
