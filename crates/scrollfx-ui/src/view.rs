use crate::Modifier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Default,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSize {
    Default,
    Sm,
    Lg,
}

impl ButtonSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Section,
    Box,
    Heading { level: u8 },
    Paragraph,
    Span,
    Text { text: String },
    Button {
        text: String,
        variant: ButtonVariant,
        size: ButtonSize,
    },
    LineBreak,
}

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }

    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Depth-first search for the first view carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&View> {
        if self.modifier.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// Concatenated text of this view and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            ViewKind::Text { text } | ViewKind::Button { text, .. } => out.push_str(text),
            ViewKind::LineBreak => out.push('\n'),
            _ => {}
        }
        for c in &self.children {
            c.collect_text(out);
        }
    }
}
