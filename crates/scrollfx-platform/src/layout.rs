use scrollfx_core::{Rect, Size};
use taffy::prelude::{auto, length, percent};
use taffy::TaffyTree;
use taffy::geometry::Size as TaffySize;
use taffy::style::{AvailableSpace, Display, FlexDirection, Style};

use crate::PlatformError;

/// Stacks full-width sections top to bottom. Each section is at least one
/// viewport tall and grows to its content height when that is larger.
///
/// Returns one document rect per entry of `content_heights`.
pub fn stack_sections(viewport: Size, content_heights: &[f32]) -> Result<Vec<Rect>, PlatformError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let children = content_heights
        .iter()
        .map(|&h| {
            tree.new_leaf(Style {
                size: TaffySize {
                    width: percent(1.0),
                    height: if h > 0.0 { length(h) } else { auto() },
                },
                min_size: TaffySize {
                    width: auto(),
                    height: length(viewport.height),
                },
                flex_shrink: 0.0,
                ..Default::default()
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let root = tree.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: TaffySize {
                width: length(viewport.width),
                height: auto(),
            },
            ..Default::default()
        },
        &children,
    )?;

    tree.compute_layout(
        root,
        TaffySize {
            width: AvailableSpace::Definite(viewport.width),
            height: AvailableSpace::MaxContent,
        },
    )?;

    children
        .iter()
        .map(|&node| -> Result<Rect, PlatformError> {
            let l = tree.layout(node)?;
            Ok(Rect::new(l.location.x, l.location.y, l.size.width, l.size.height))
        })
        .collect()
}

/// Height of the whole page once `sections` are stacked.
pub fn document_height(sections: &[Rect]) -> f32 {
    sections.iter().map(|r| r.bottom()).fold(0.0, f32::max)
}
