//! Active Project Selection
//!
//! Resolves which project is active given the fetched list, an id
//! carried in the page address, and the previous in-session choice.

use crate::models::Project;

/// Deterministic selection precedence:
/// 1. address id found in the list
/// 2. address id present but missing -> first element (graceful, no error)
/// 3. previous selection found in the list
/// 4. first element
/// An empty list yields `None`; that is an empty state, not a fault.
pub fn resolve_selection(
    list: &[Project],
    address_id: Option<&str>,
    previous_id: Option<&str>,
) -> Option<String> {
    let find = |id: &str| list.iter().find(|p| p.id == id);

    if let Some(id) = address_id {
        return find(id)
            .or_else(|| list.first())
            .map(|p| p.id.clone());
    }
    if let Some(id) = previous_id {
        if let Some(found) = find(id) {
            return Some(found.id.clone());
        }
    }
    list.first().map(|p| p.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn projects(ids: &[&str]) -> Vec<Project> {
        ids.iter()
            .map(|id| Project { id: id.to_string(), ..Default::default() })
            .collect()
    }

    #[test]
    fn test_address_id_wins_when_present_in_list() {
        let list = projects(&["p1", "p2", "p3"]);
        let picked = resolve_selection(&list, Some("p2"), Some("p3"));
        assert_eq!(picked.as_deref(), Some("p2"));
    }

    #[test]
    fn test_address_miss_degrades_to_first() {
        // id=p9 deep link over [p1, p2]: first element, no error
        let list = projects(&["p1", "p2"]);
        let picked = resolve_selection(&list, Some("p9"), Some("p2"));
        assert_eq!(picked.as_deref(), Some("p1"));
    }

    #[test]
    fn test_previous_selection_survives_refetch() {
        let list = projects(&["p1", "p2", "p3"]);
        let picked = resolve_selection(&list, None, Some("p3"));
        assert_eq!(picked.as_deref(), Some("p3"));
    }

    #[test]
    fn test_stale_previous_selection_falls_back_to_first() {
        let list = projects(&["p1", "p2"]);
        let picked = resolve_selection(&list, None, Some("gone"));
        assert_eq!(picked.as_deref(), Some("p1"));
    }

    #[test]
    fn test_no_context_picks_first() {
        let list = projects(&["p1", "p2"]);
        assert_eq!(resolve_selection(&list, None, None).as_deref(), Some("p1"));
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        assert_eq!(resolve_selection(&[], Some("p1"), Some("p2")), None);
        assert_eq!(resolve_selection(&[], None, None), None);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_that_id() {
        let list = projects(&["p1", "p2", "p2"]);
        assert_eq!(resolve_selection(&list, Some("p2"), None).as_deref(), Some("p2"));
    }

    fn id_strategy() -> impl Strategy<Value = String> {
        prop_oneof![Just("p1"), Just("p2"), Just("p3"), Just("p9")].prop_map(String::from)
    }

    proptest! {
        #[test]
        fn prop_result_absent_only_for_empty_list(
            ids in prop::collection::vec(id_strategy(), 0..6),
            address in prop::option::of(id_strategy()),
            previous in prop::option::of(id_strategy()),
        ) {
            let list: Vec<Project> = ids.iter()
                .map(|id| Project { id: id.clone(), ..Default::default() })
                .collect();
            let picked = resolve_selection(&list, address.as_deref(), previous.as_deref());
            match picked {
                None => prop_assert!(list.is_empty()),
                Some(id) => prop_assert!(list.iter().any(|p| p.id == id)),
            }
        }

        #[test]
        fn prop_precedence_order_holds(
            ids in prop::collection::vec(id_strategy(), 1..6),
            address in prop::option::of(id_strategy()),
            previous in prop::option::of(id_strategy()),
        ) {
            let list: Vec<Project> = ids.iter()
                .map(|id| Project { id: id.clone(), ..Default::default() })
                .collect();
            let picked = resolve_selection(&list, address.as_deref(), previous.as_deref())
                .expect("non-empty list always selects");

            let in_list = |id: &Option<String>| {
                id.as_deref().is_some_and(|id| list.iter().any(|p| p.id == id))
            };
            if in_list(&address) {
                prop_assert_eq!(picked, address.clone().unwrap_or_default());
            } else if address.is_some() {
                // Deep-link miss outranks the previous choice
                prop_assert_eq!(&picked, &list[0].id);
            } else if in_list(&previous) {
                prop_assert_eq!(picked, previous.clone().unwrap_or_default());
            } else {
                prop_assert_eq!(&picked, &list[0].id);
            }
        }
    }
}
