use crate::expected::{Expected, ExpectedSet};
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that matches another parser a bounded number of times
///
/// The child parser is applied repeatedly, each time from where the previous
/// match stopped, until it fails. The number of matches is then checked
/// against `[min, max]`; outside that range the whole repetition fails and no
/// partial result is kept.
///
/// `greedy` controls what happens at `max`:
///
/// - greedy: keep matching for as long as the child matches, then check the
///   range. Finding more than `max` matches is a failure; the repetition does
///   not give matches back to land on exactly `max`.
/// - non-greedy: stop asking the child once `max` matches are collected, so
///   extra matching input is simply left for whatever parser comes next.
///
/// In a loop that only a child failure can stop (greedy, or without a `max`),
/// a child that succeeds without consuming input is recorded once and ends
/// the loop. A bounded non-greedy loop keeps collecting such matches up to
/// `max`.
pub struct Repeat<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
    greedy: bool,
}

impl<P> Repeat<P> {
    /// Any number of matches, greedy
    pub fn new(parser: P) -> Self {
        Repeat {
            parser,
            min: 0,
            max: None,
            greedy: true,
        }
    }

    pub fn at_least(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    pub fn at_most(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn greedy(mut self, greedy: bool) -> Self {
        self.greedy = greedy;
        self
    }

    fn in_range(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }

    fn below_max(&self, count: usize) -> bool {
        self.max.is_none_or(|max| count < max)
    }

    /// Whether the loop can only be stopped by a child failure
    fn unbounded(&self) -> bool {
        self.greedy || self.max.is_none()
    }
}

impl<P> Parser for Repeat<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Cursor, Self::Output> {
        let mut results = Vec::new();
        let mut current = cursor;
        let mut stopped_by = None;

        while self.greedy || self.below_max(results.len()) {
            match self.parser.parse(current) {
                Outcome::Success {
                    remaining, value, ..
                } => {
                    results.push(value);
                    if remaining == current && self.unbounded() {
                        break;
                    }
                    current = remaining;
                }
                Outcome::Failure { rejected_by, .. } => {
                    stopped_by = Some(rejected_by);
                    break;
                }
            }
        }

        if self.in_range(results.len()) {
            return Outcome::success(cursor, current, results);
        }

        // Nothing matched at the start: the child's rejectors say what was missing there
        let rejected_by = match stopped_by {
            Some(rejected_by) if results.is_empty() && !rejected_by.is_empty() => rejected_by,
            _ => ExpectedSet::single(Expected::Count {
                min: self.min,
                max: self.max,
            }),
        };
        Outcome::failure(cursor, rejected_by)
    }
}

/// Zero or more matches
pub fn zero_or_more<P: Parser>(parser: P) -> Repeat<P> {
    Repeat::new(parser).greedy(false)
}

/// One or more matches
pub fn one_or_more<P: Parser>(parser: P) -> Repeat<P> {
    Repeat::new(parser).at_least(1).greedy(false)
}

/// Between `min` and `max` matches (`None` means unbounded)
pub fn repeat<P: Parser>(parser: P, min: usize, max: Option<usize>, greedy: bool) -> Repeat<P> {
    Repeat {
        parser,
        min,
        max,
        greedy,
    }
}

/// Extension trait to add repetition methods to parsers
pub trait RepeatExt: Parser + Sized {
    fn zero_or_more(self) -> Repeat<Self> {
        zero_or_more(self)
    }

    fn one_or_more(self) -> Repeat<Self> {
        one_or_more(self)
    }

    /// Greedy repetition with default bounds; adjust with the builder methods
    fn repeated(self) -> Repeat<Self> {
        Repeat::new(self)
    }
}

/// Implement RepeatExt for all parsers
impl<P> RepeatExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::{SliceCursor, Stream};
    use crate::end::end_of_input;
    use crate::token::is_token;
    use std::cell::Cell;

    #[test]
    fn test_zero_or_more_no_match() {
        let data = [2];
        let cursor = SliceCursor::new(&data);

        let outcome = zero_or_more(is_token(1)).parse(cursor);
        assert_eq!(outcome.value(), Some(&vec![]));
        assert_eq!(outcome.remaining(), cursor);
    }

    #[test]
    fn test_zero_or_more_matches() {
        let data = [1, 1, 1, 2];
        let cursor = SliceCursor::new(&data);

        let outcome = zero_or_more(is_token(1)).parse(cursor);
        assert_eq!(outcome.value(), Some(&vec![1, 1, 1]));
        assert_eq!(outcome.start(), cursor);
        assert_eq!(outcome.remaining().value().unwrap(), 2);
        assert_eq!(outcome.remaining().position(), 3);
    }

    #[test]
    fn test_zero_or_more_empty_input() {
        let data: [i32; 0] = [];
        let cursor = SliceCursor::new(&data);

        let outcome = is_token(1).zero_or_more().parse(cursor);
        assert_eq!(outcome.value(), Some(&vec![]));
        assert!(outcome.remaining().eos());
    }

    #[test]
    fn test_one_or_more_no_match() {
        let data = [2];
        let cursor = SliceCursor::new(&data);

        let outcome = one_or_more(is_token(1)).parse(cursor);
        assert!(outcome.is_failure());
        assert_eq!(outcome.remaining(), cursor);
        // The child's rejection explains what was missing
        assert!(outcome.rejected_by().unwrap().expects_token(&1));
    }

    #[test]
    fn test_one_or_more_matches() {
        let data = [1, 1, 1, 2];
        let cursor = SliceCursor::new(&data);

        let outcome = is_token(1).one_or_more().parse(cursor);
        assert_eq!(outcome.value(), Some(&vec![1, 1, 1]));
    }

    #[test]
    fn test_bounded_range_match() {
        let data = [1, 1, 1, 2];
        let cursor = SliceCursor::new(&data);

        let outcome = repeat(is_token(1), 2, Some(4), true).parse(cursor);
        assert_eq!(outcome.value(), Some(&vec![1, 1, 1]));
    }

    #[test]
    fn test_bounded_too_few() {
        let data = [1, 1, 1, 2];
        let cursor = SliceCursor::new(&data);

        let outcome = repeat(is_token(1), 4, None, true).parse(cursor);
        assert!(outcome.is_failure());
        assert_eq!(outcome.start(), cursor);
        assert_eq!(outcome.remaining(), cursor);
    }

    #[test]
    fn test_bounded_non_greedy_stops_at_max() {
        let data = [1, 1, 1, 2];
        let cursor = SliceCursor::new(&data);

        let outcome = repeat(is_token(1), 0, Some(2), false).parse(cursor);
        assert_eq!(outcome.value(), Some(&vec![1, 1]));
        assert_eq!(outcome.remaining().position(), 2);
    }

    #[test]
    fn test_bounded_greedy_overshoot_fails() {
        let data = [1, 1, 1, 2];
        let cursor = SliceCursor::new(&data);

        let outcome = repeat(is_token(1), 0, Some(2), true).parse(cursor);
        assert!(outcome.is_failure());
        assert_eq!(outcome.remaining(), cursor);
        assert!(outcome.rejected_by().unwrap().contains(&Expected::Count {
            min: 0,
            max: Some(2),
        }));
    }

    #[test]
    fn test_greedy_exact_max_succeeds() {
        let data = [1, 1, 2];
        let cursor = SliceCursor::new(&data);

        let outcome = is_token(1).repeated().at_least(2).at_most(2).parse(cursor);
        assert_eq!(outcome.value(), Some(&vec![1, 1]));
    }

    #[test]
    fn test_greedy_min_equals_max_overshoot() {
        let data = [1, 1, 1, 2];
        let cursor = SliceCursor::new(&data);

        let outcome = is_token(1)
            .repeated()
            .at_least(2)
            .at_most(2)
            .greedy(true)
            .parse(cursor);
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_non_greedy_does_not_probe_past_max() {
        let data = [1, 1, 1];
        let cursor = SliceCursor::new(&data);
        let calls = Cell::new(0);
        let counting = crate::map::map(is_token(1), |v: i32| {
            calls.set(calls.get() + 1);
            v
        });

        let outcome = repeat(counting, 0, Some(2), false).parse(cursor);
        assert_eq!(outcome.value(), Some(&vec![1, 1]));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_zero_width_child_terminates() {
        let data: [i32; 0] = [];
        let cursor = SliceCursor::new(&data);

        let outcome = zero_or_more(end_of_input()).parse(cursor);
        assert_eq!(outcome.value(), Some(&vec![()]));
        assert_eq!(outcome.remaining(), cursor);
    }

    #[test]
    fn test_zero_width_child_bounded_non_greedy_runs_to_max() {
        let data: [i32; 0] = [];
        let cursor = SliceCursor::new(&data);

        let outcome = repeat(end_of_input(), 2, Some(3), false).parse(cursor);
        assert_eq!(outcome.value(), Some(&vec![(), (), ()]));
        assert_eq!(outcome.remaining(), cursor);
    }

    #[test]
    fn test_zero_width_child_greedy_below_min_fails() {
        let data: [i32; 0] = [];
        let cursor = SliceCursor::new(&data);

        let outcome = repeat(end_of_input(), 2, Some(3), true).parse(cursor);
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_too_few_after_partial_match_reports_count() {
        let data = [1, 1, 2];
        let cursor = SliceCursor::new(&data);

        let outcome = repeat(is_token(1), 3, None, true).parse(cursor);
        assert!(outcome.is_failure());
        assert!(!outcome.rejected_by().unwrap().expects_token(&1));
        assert_eq!(
            outcome.describe_failure().unwrap(),
            "expected at least 3 repetitions at position 0"
        );
    }

    #[test]
    fn test_repeat_over_stream_pulls_each_token_once() {
        let pulls = Cell::new(0);
        let stream = Stream::new("aaab".chars().inspect(|_| pulls.set(pulls.get() + 1)));
        let cursor = stream.cursor();
        let parser = one_or_more(is_token('a'));

        let first = parser.parse(cursor);
        let second = parser.parse(cursor);
        assert_eq!(first, second);
        assert_eq!(first.value(), Some(&vec!['a', 'a', 'a']));
        assert_eq!(pulls.get(), 4);
    }
}
