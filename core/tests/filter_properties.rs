use proptest::prelude::*;
use proptest::test_runner::Config;
use todo_core::filter::{counts, derive, search};
use todo_core::{Filter, TodoItem};

fn todos() -> impl Strategy<Value = Vec<TodoItem>> {
    prop::collection::vec(("[a-zA-Z ]{1,12}", any::<bool>()), 0..24).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(index, (text, is_completed))| TodoItem {
                id: index.to_string(),
                text,
                is_completed,
            })
            .collect()
    })
}

fn filter() -> impl Strategy<Value = Filter> {
    prop::sample::select(Filter::ALL.to_vec())
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn active_is_exactly_incomplete_in_order(list in todos()) {
        let expected: Vec<TodoItem> = list.iter().filter(|t| !t.is_completed).cloned().collect();
        prop_assert_eq!(derive(&list, Filter::Active), expected);
    }

    #[test]
    fn active_and_completed_partition_the_list(list in todos()) {
        let active = derive(&list, Filter::Active);
        let completed = derive(&list, Filter::Completed);
        prop_assert_eq!(active.len() + completed.len(), list.len());
        prop_assert!(completed.iter().all(|t| t.is_completed));
        prop_assert_eq!(derive(&list, Filter::All), list);
    }

    #[test]
    fn derive_is_a_subsequence(list in todos(), f in filter()) {
        let visible = derive(&list, f);
        let mut remaining = list.iter();
        for item in &visible {
            prop_assert!(remaining.any(|t| t == item));
        }
    }

    #[test]
    fn counts_agree_with_derive(list in todos()) {
        let c = counts(&list);
        prop_assert_eq!(c.total, list.len());
        prop_assert_eq!(c.active, derive(&list, Filter::Active).len());
        prop_assert_eq!(c.completed, derive(&list, Filter::Completed).len());
        prop_assert_eq!(c.active + c.completed, c.total);
    }

    #[test]
    fn search_by_own_text_finds_item(list in todos()) {
        for item in &list {
            let upper = item.text.to_uppercase();
            prop_assert!(search(&list, &upper).contains(item));
        }
    }
}
