use crate::element::{Element, ElementId};
use std::collections::HashSet;

/// Visitor pattern for traversing element trees immutably
///
/// The default implementation walks the entire tree depth-first.
/// Override `visit_element` to act on nodes; call `walk_element` to keep
/// descending.
pub trait Visitor: Sized {
    fn visit_elements(&mut self, elements: &[Element]) {
        for element in elements {
            self.visit_element(element);
        }
    }

    fn visit_element(&mut self, element: &Element) {
        walk_element(self, element);
    }
}

pub fn walk_element<V: Visitor>(visitor: &mut V, element: &Element) {
    for child in &element.children {
        visitor.visit_element(child);
    }
}

struct IdCollector {
    ids: Vec<ElementId>,
}

impl Visitor for IdCollector {
    fn visit_element(&mut self, element: &Element) {
        self.ids.push(element.id.clone());
        walk_element(self, element);
    }
}

/// Every id in the forest, in depth-first order
pub fn collect_ids(elements: &[Element]) -> Vec<ElementId> {
    let mut collector = IdCollector { ids: Vec::new() };
    collector.visit_elements(elements);
    collector.ids
}

/// Total number of elements in the forest
pub fn count_elements(elements: &[Element]) -> usize {
    collect_ids(elements).len()
}

/// First id that appears more than once, if any
pub fn find_duplicate_id(elements: &[Element]) -> Option<ElementId> {
    let mut seen = HashSet::new();
    collect_ids(elements).into_iter().find(|id| !seen.insert(id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementType;

    fn forest() -> Vec<Element> {
        vec![
            Element::new("a", ElementType::Div)
                .with_child(Element::new("b", ElementType::P))
                .with_child(
                    Element::new("c", ElementType::Ul)
                        .with_child(Element::new("d", ElementType::Li)),
                ),
            Element::new("e", ElementType::Hr),
        ]
    }

    #[test]
    fn test_collect_ids_depth_first() {
        let ids: Vec<String> = collect_ids(&forest()).iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(count_elements(&forest()), 5);
    }

    #[test]
    fn test_find_duplicate_id() {
        assert!(find_duplicate_id(&forest()).is_none());

        let mut elements = forest();
        elements.push(Element::new("c", ElementType::Span));
        assert_eq!(find_duplicate_id(&elements), Some(ElementId::from("c")));
    }
}
