use catalog::{Color, Product, Size};
use proptest::prelude::*;
use specification::product::{ColorSpecification, SizeSpecification};
use specification::{AlwaysFalse, AlwaysTrue, BetterFilter, Filter, Specification, and};

fn arb_color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn arb_size() -> impl Strategy<Value = Size> {
    prop::sample::select(Size::ALL.to_vec())
}

fn arb_product() -> impl Strategy<Value = Product> {
    ("[a-z]{1,8}", arb_color(), arb_size())
        .prop_map(|(name, color, size)| Product::new(name, color, size))
}

fn arb_products() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 0..40)
}

/// Position of every selected reference within the source slice
fn positions(source: &[Product], selected: &[&Product]) -> Vec<usize> {
    selected
        .iter()
        .map(|s| {
            source
                .iter()
                .position(|p| std::ptr::eq(p, *s))
                .expect("selected item must come from the source")
        })
        .collect()
}

proptest! {
    #[test]
    fn always_true_returns_everything(products in arb_products()) {
        let selected = BetterFilter.filter(&products, &AlwaysTrue);
        let expected: Vec<&Product> = products.iter().collect();
        prop_assert_eq!(selected, expected);
    }

    #[test]
    fn always_false_returns_nothing(products in arb_products()) {
        prop_assert!(BetterFilter.filter(&products, &AlwaysFalse).is_empty());
    }

    #[test]
    fn order_is_preserved(products in arb_products(), color in arb_color()) {
        let selected = BetterFilter.filter(&products, &ColorSpecification::new(color));
        let idx = positions(&products, &selected);
        prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn result_is_exactly_the_matching_items(products in arb_products(), size in arb_size()) {
        let spec = SizeSpecification::new(size);
        let selected = BetterFilter.filter(&products, &spec);

        prop_assert!(selected.len() <= products.len());
        prop_assert!(selected.iter().all(|p| spec.is_satisfied(*p)));
        prop_assert_eq!(
            selected.len(),
            products.iter().filter(|p| p.size == size).count()
        );
    }

    #[test]
    fn conjunction_equals_sequential_filtering(
        products in arb_products(),
        color in arb_color(),
        size in arb_size(),
    ) {
        let first = SizeSpecification::new(size);
        let second = ColorSpecification::new(color);

        let combined = BetterFilter.filter(&products, &and(first, second));

        let narrowed: Vec<Product> = BetterFilter
            .filter(&products, &first)
            .into_iter()
            .cloned()
            .collect();
        let sequential = BetterFilter.filter(&narrowed, &second);

        prop_assert_eq!(combined, sequential);
    }

    #[test]
    fn parallel_equals_sequential(products in arb_products(), color in arb_color()) {
        let spec = ColorSpecification::new(color);
        prop_assert_eq!(
            BetterFilter.par_filter(&products, &spec),
            BetterFilter.filter(&products, &spec)
        );
    }
}
