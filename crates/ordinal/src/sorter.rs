//! Positional ordering of named items.
//!
//! The sorter turns a sequence of `(name, directive)` pairs into a total
//! order of the names:
//!
//! ```text
//! head     start items, highest priority first
//! lead     `before <missing>` items
//! middle   numeric and unpositioned items, ascending
//! trail    `after <missing>` items
//! tail     end items, lowest priority first
//! ```
//!
//! `before`/`after` items are attached next to their reference wherever it
//! ends up. References are resolved by a fixed-point iteration: every pass
//! attaches the items whose reference has already been placed, and a pass
//! that cannot attach anything anchors a group of unresolvable items in the
//! lead or trail instead. Every pass removes at least one pending group, so
//! the iteration ends after at most one pass per item.

use std::{cmp::Reverse, collections::HashSet};

use indexmap::IndexMap;
use log::{debug, trace, warn};

use ordinal_core::{
    directive::{Directive, Priority},
    item::Item,
    weight::Weight,
};

/// Items waiting for one reference to be placed.
#[derive(Debug, Default)]
struct Attachments<'a> {
    before: Vec<(Priority, &'a str)>,
    after: Vec<(Priority, &'a str)>,
}

impl<'a> Attachments<'a> {
    /// Split into `before` and `after` names in output order.
    ///
    /// Higher priorities end up closer to the reference on both sides. Ties
    /// keep input order.
    fn into_ordered(mut self) -> (Vec<&'a str>, Vec<&'a str>) {
        self.before.sort_by_key(|(priority, _)| *priority);
        self.after.sort_by_key(|(priority, _)| Reverse(*priority));
        (names(self.before), names(self.after))
    }
}

fn names<'a, K>(entries: Vec<(K, &'a str)>) -> Vec<&'a str> {
    entries.into_iter().map(|(_, name)| name).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Head,
    Lead,
    Middle,
    Trail,
    Tail,
}

const REGIONS: [Region; 5] = [
    Region::Head,
    Region::Lead,
    Region::Middle,
    Region::Trail,
    Region::Tail,
];

/// The order assembled so far.
#[derive(Debug, Default)]
struct Layout<'a> {
    head: Vec<&'a str>,
    lead: Vec<&'a str>,
    middle: Vec<&'a str>,
    trail: Vec<&'a str>,
    tail: Vec<&'a str>,
    placed: HashSet<&'a str>,
}

impl<'a> Layout<'a> {
    fn new(head: Vec<&'a str>, middle: Vec<&'a str>, tail: Vec<&'a str>) -> Self {
        let placed = head.iter().chain(&middle).chain(&tail).copied().collect();
        Self {
            head,
            middle,
            tail,
            placed,
            ..Self::default()
        }
    }

    fn region(&self, region: Region) -> &Vec<&'a str> {
        match region {
            Region::Head => &self.head,
            Region::Lead => &self.lead,
            Region::Middle => &self.middle,
            Region::Trail => &self.trail,
            Region::Tail => &self.tail,
        }
    }

    fn region_mut(&mut self, region: Region) -> &mut Vec<&'a str> {
        match region {
            Region::Head => &mut self.head,
            Region::Lead => &mut self.lead,
            Region::Middle => &mut self.middle,
            Region::Trail => &mut self.trail,
            Region::Tail => &mut self.tail,
        }
    }

    fn is_placed(&self, name: &str) -> bool {
        self.placed.contains(name)
    }

    fn locate(&self, name: &str) -> Option<(Region, usize)> {
        REGIONS.into_iter().find_map(|region| {
            self.region(region)
                .iter()
                .position(|placed| *placed == name)
                .map(|index| (region, index))
        })
    }

    /// Insert `attachments` around the already placed `target`.
    fn attach(&mut self, target: &str, attachments: Attachments<'a>) {
        let Some((region, index)) = self.locate(target) else {
            return;
        };
        let (before, after) = attachments.into_ordered();
        self.placed.extend(before.iter().chain(&after).copied());

        let slots = self.region_mut(region);
        slots.splice(index + 1..index + 1, after);
        slots.splice(index..index, before);
    }

    /// Place `attachments` whose target cannot be resolved.
    fn anchor(&mut self, attachments: Attachments<'a>) {
        let (before, after) = attachments.into_ordered();
        self.placed.extend(before.iter().chain(&after).copied());

        self.lead.extend(before);
        self.trail.extend(after);
    }

    fn into_order(self) -> Vec<&'a str> {
        let mut order = self.head;
        order.extend(self.lead);
        order.extend(self.middle);
        order.extend(self.trail);
        order.extend(self.tail);
        order
    }
}

/// Order names by their position directives.
///
/// The result is a permutation of the input names. Input order breaks
/// every tie.
///
/// # Examples
///
/// ```
/// use ordinal::{directive::Directive, sorter::sort};
///
/// let items = [
///     ("third", Directive::Unspecified),
///     ("second", Directive::Before("third".to_string(), 0)),
///     ("first", Directive::Before("second".to_string(), 0)),
/// ];
///
/// let order = sort(items.iter().map(|(name, directive)| (*name, directive)));
/// assert_eq!(order, ["first", "second", "third"]);
/// ```
pub fn sort<'a, I>(items: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = (&'a str, &'a Directive)>,
{
    let mut starts = Vec::new();
    let mut ends = Vec::new();
    let mut middle = Vec::new();
    let mut pending: IndexMap<&'a str, Attachments<'a>> = IndexMap::new();
    let mut known = HashSet::new();
    let mut total = 0;

    for (name, directive) in items {
        known.insert(name);
        total += 1;
        match directive {
            Directive::Start(priority) => starts.push((*priority, name)),
            Directive::End(priority) => ends.push((*priority, name)),
            Directive::Numeric(value) => middle.push((*value, name)),
            Directive::Unspecified => middle.push((Weight::ZERO, name)),
            Directive::Before(target, priority) => pending
                .entry(target.as_str())
                .or_default()
                .before
                .push((*priority, name)),
            Directive::After(target, priority) => pending
                .entry(target.as_str())
                .or_default()
                .after
                .push((*priority, name)),
        }
    }

    starts.sort_by_key(|(priority, _)| Reverse(*priority));
    ends.sort_by_key(|(priority, _)| *priority);
    middle.sort_by_key(|(value, _)| *value);

    let mut layout = Layout::new(names(starts), names(middle), names(ends));
    resolve(&mut layout, pending, &known);

    let order = layout.into_order();
    debug_assert_eq!(order.len(), total);
    order
}

/// Order a slice of [`Item`]s by their directives.
pub fn sort_items(items: &[Item]) -> Vec<&str> {
    sort(items.iter().map(|item| (item.name(), item.directive())))
}

fn resolve<'a>(
    layout: &mut Layout<'a>,
    mut pending: IndexMap<&'a str, Attachments<'a>>,
    known: &HashSet<&'a str>,
) {
    let groups = pending.len();
    let mut passes = 0;

    while !pending.is_empty() {
        passes += 1;

        let ready: Vec<&'a str> = pending
            .keys()
            .copied()
            .filter(|target| layout.is_placed(target))
            .collect();
        if !ready.is_empty() {
            for target in ready {
                if let Some(attachments) = pending.shift_remove(target) {
                    trace!(reference = target; "Attaching items to reference");
                    layout.attach(target, attachments);
                }
            }
            continue;
        }

        let dangling: Vec<&'a str> = pending
            .keys()
            .copied()
            .filter(|target| !known.contains(target))
            .collect();
        if !dangling.is_empty() {
            for target in dangling {
                if let Some(attachments) = pending.shift_remove(target) {
                    debug!(reference = target; "Reference to missing item, anchoring around middle items");
                    layout.anchor(attachments);
                }
            }
            continue;
        }

        // Every remaining reference points at an unplaced relative item.
        if let Some((target, attachments)) = pending.shift_remove_index(0) {
            warn!(reference = target; "Cyclic position reference, anchoring around middle items");
            layout.anchor(attachments);
        }
    }

    debug_assert!(passes <= groups);
    trace!(passes, groups; "Resolved relative positions");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn before(target: &str, priority: Priority) -> Directive {
        Directive::Before(target.to_string(), priority)
    }

    fn after(target: &str, priority: Priority) -> Directive {
        Directive::After(target.to_string(), priority)
    }

    fn numeric(value: f64) -> Directive {
        Directive::Numeric(Weight::new(value).unwrap())
    }

    fn order_of(items: &[(&str, Directive)]) -> Vec<String> {
        sort(items.iter().map(|(name, directive)| (*name, directive)))
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(order_of(&[]).is_empty());
    }

    #[test]
    fn test_end_goes_to_end() {
        let order = order_of(&[("second", Directive::End(0)), ("first", Directive::Unspecified)]);
        assert_eq!(order, ["first", "second"]);
    }

    #[test]
    fn test_start_goes_to_start() {
        let order = order_of(&[("second", Directive::Unspecified), ("first", Directive::Start(0))]);
        assert_eq!(order, ["first", "second"]);
    }

    #[test]
    fn test_start_priority() {
        let order = order_of(&[("second", Directive::Start(50)), ("first", Directive::Start(52))]);
        assert_eq!(order, ["first", "second"]);
    }

    #[test]
    fn test_end_priority() {
        let order = order_of(&[("second", Directive::End(17)), ("first", Directive::End(0))]);
        assert_eq!(order, ["first", "second"]);
    }

    #[test]
    fn test_numbers_are_in_the_middle() {
        let order = order_of(&[
            ("last", Directive::End(0)),
            ("second", Directive::Numeric(17.into())),
            ("first", Directive::Numeric(5.into())),
            ("third", Directive::Numeric(18.into())),
        ]);
        assert_eq!(order, ["first", "second", "third", "last"]);
    }

    #[test]
    fn test_unpositioned_sorts_as_zero() {
        let order = order_of(&[
            ("positive", Directive::Numeric(1.into())),
            ("plain", Directive::Unspecified),
            ("negative", Directive::Numeric((-1).into())),
            ("zero", Directive::Numeric(Weight::ZERO)),
        ]);
        assert_eq!(order, ["negative", "plain", "zero", "positive"]);
    }

    #[test]
    fn test_fractions_sort_by_value() {
        let order = order_of(&[("a", numeric(17.5)), ("b", numeric(17.0))]);
        assert_eq!(order, ["b", "a"]);

        let order = order_of(&[("a", numeric(2.75)), ("b", numeric(2.5)), ("c", numeric(3.0))]);
        assert_eq!(order, ["b", "a", "c"]);
    }

    #[test]
    fn test_fractions_around_unpositioned() {
        let order = order_of(&[
            ("a", numeric(0.5)),
            ("b", Directive::Unspecified),
            ("c", numeric(-0.5)),
        ]);
        assert_eq!(order, ["c", "b", "a"]);
    }

    #[test]
    fn test_before_present_reference() {
        let order = order_of(&[("second", Directive::Unspecified), ("first", before("second", 0))]);
        assert_eq!(order, ["first", "second"]);
    }

    #[test]
    fn test_before_missing_reference() {
        let order = order_of(&[
            ("third", Directive::Unspecified),
            ("second", before("third", 0)),
            ("first", before("unknown", 0)),
        ]);
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_before_missing_reference_follows_start_block() {
        let order = order_of(&[
            ("body", Directive::Unspecified),
            ("orphan", before("unknown", 0)),
            ("header", Directive::Start(0)),
        ]);
        assert_eq!(order, ["header", "orphan", "body"]);
    }

    #[test]
    fn test_before_priority() {
        let order = order_of(&[
            ("third", Directive::Unspecified),
            ("second", before("third", 12)),
            ("first", before("third", 0)),
        ]);
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_before_recursive() {
        let order = order_of(&[
            ("third", Directive::Unspecified),
            ("second", before("third", 0)),
            ("first", before("second", 0)),
        ]);
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_after_present_reference() {
        let order = order_of(&[("second", after("first", 0)), ("first", Directive::Unspecified)]);
        assert_eq!(order, ["first", "second"]);
    }

    #[test]
    fn test_after_missing_reference() {
        let order = order_of(&[
            ("second", after("unknown", 0)),
            ("third", Directive::End(0)),
            ("first", Directive::Unspecified),
        ]);
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_after_priority() {
        let order = order_of(&[
            ("third", after("first", 0)),
            ("second", after("first", 12)),
            ("first", Directive::Unspecified),
        ]);
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_after_recursive() {
        let order = order_of(&[
            ("third", after("second", 0)),
            ("second", after("first", 0)),
            ("first", Directive::Unspecified),
        ]);
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_relative_to_start_and_end_items() {
        let order = order_of(&[
            ("footer", Directive::End(0)),
            ("copyright", after("footer", 0)),
            ("header", Directive::Start(0)),
            ("logo", before("header", 0)),
            ("body", Directive::Unspecified),
        ]);
        assert_eq!(order, ["logo", "header", "body", "footer", "copyright"]);
    }

    #[test]
    fn test_before_and_after_same_reference() {
        let order = order_of(&[
            ("b", after("anchor", 0)),
            ("a", before("anchor", 0)),
            ("anchor", Directive::Unspecified),
            ("tail", Directive::Unspecified),
        ]);
        assert_eq!(order, ["a", "anchor", "b", "tail"]);
    }

    #[test]
    fn test_cycle_is_still_a_permutation() {
        let order = order_of(&[
            ("a", before("b", 0)),
            ("b", before("a", 0)),
            ("c", Directive::Unspecified),
        ]);
        assert_eq!(order, ["b", "a", "c"]);
    }

    #[test]
    fn test_self_reference() {
        let order = order_of(&[("a", after("a", 0)), ("b", Directive::Unspecified)]);
        assert_eq!(order, ["b", "a"]);
    }

    #[test]
    fn test_sort_items() {
        let items = vec![
            Item::new("second", Directive::End(0)),
            Item::unpositioned("first"),
        ];
        assert_eq!(sort_items(&items), ["first", "second"]);
    }
}
