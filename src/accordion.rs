use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqItemState {
    pub expanded: bool,
    /// Answer height in px; 0 while collapsed.
    pub max_height: u32,
}

impl FaqItemState {
    pub fn toggle_rotation(&self) -> &'static str {
        if self.expanded {
            "rotate(45deg)"
        } else {
            "rotate(0)"
        }
    }

    fn collapse(&mut self) {
        self.expanded = false;
        self.max_height = 0;
    }
}

pub enum AccordionAction {
    /// `natural_height` is the answer's scroll height, measured at click time.
    Toggle { index: usize, natural_height: u32 },
    /// Fresh scroll heights after a resize, by item index.
    Remeasure(Vec<Option<u32>>),
}

/// Single-open FAQ list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    items: Vec<FaqItemState>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self {
            items: vec![FaqItemState::default(); len],
        }
    }

    pub fn item(&self, index: usize) -> FaqItemState {
        self.items.get(index).copied().unwrap_or_default()
    }

    #[cfg(test)]
    pub fn open_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.expanded)
    }

    pub fn toggle(&mut self, index: usize, natural_height: u32) {
        let Some(was_open) = self.items.get(index).map(|item| item.expanded) else {
            return;
        };

        if !was_open {
            for (i, other) in self.items.iter_mut().enumerate() {
                if i != index && other.expanded {
                    other.collapse();
                }
            }
        }

        let item = &mut self.items[index];
        if was_open {
            item.collapse();
        } else {
            item.expanded = true;
            item.max_height = natural_height;
        }
    }

    pub fn remeasure(&mut self, heights: &[Option<u32>]) {
        for (item, height) in self.items.iter_mut().zip(heights) {
            if let (true, Some(height)) = (item.expanded, height) {
                item.max_height = *height;
            }
        }
    }
}

impl Reducible for Accordion {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AccordionAction::Toggle { index, natural_height } => next.toggle(index, natural_height),
            AccordionAction::Remeasure(heights) => next.remeasure(&heights),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_b_collapses_a() {
        let faq = Rc::new(Accordion::new(3));
        let faq = faq.reduce(AccordionAction::Toggle { index: 0, natural_height: 120 });
        assert_eq!(faq.item(0), FaqItemState { expanded: true, max_height: 120 });

        let faq = faq.reduce(AccordionAction::Toggle { index: 1, natural_height: 80 });
        assert_eq!(faq.item(0), FaqItemState { expanded: false, max_height: 0 });
        assert_eq!(faq.item(1), FaqItemState { expanded: true, max_height: 80 });
        assert_eq!(faq.open_index(), Some(1));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        let mut faq = Accordion::new(2);
        faq.toggle(1, 64);
        faq.toggle(1, 64);
        assert_eq!(faq.item(1), FaqItemState::default());
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn toggle_icon_rotates_with_state() {
        let mut faq = Accordion::new(1);
        assert_eq!(faq.item(0).toggle_rotation(), "rotate(0)");
        faq.toggle(0, 10);
        assert_eq!(faq.item(0).toggle_rotation(), "rotate(45deg)");
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let faq = Rc::new(Accordion::new(2));
        let same = faq.clone().reduce(AccordionAction::Toggle { index: 5, natural_height: 10 });
        assert!(Rc::ptr_eq(&faq, &same));
    }

    #[test]
    fn remeasure_only_touches_open_item() {
        let mut faq = Accordion::new(3);
        faq.toggle(2, 100);
        faq.remeasure(&[Some(40), Some(50), Some(180)]);
        assert_eq!(faq.item(0).max_height, 0);
        assert_eq!(faq.item(1).max_height, 0);
        assert_eq!(faq.item(2).max_height, 180);

        faq.remeasure(&[None, None, None]);
        assert_eq!(faq.item(2).max_height, 180);
    }
}
