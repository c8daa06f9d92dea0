use super::*;
use crate::source::StrSource;

fn buffer(text: &str, capacity: usize) -> InputBuffer<StrSource<'_>> {
    InputBuffer::new(StrSource::new(text), capacity)
}

/// Helper: consume `n` chars of the current match and mark them accepted.
fn take(input: &mut InputBuffer<StrSource<'_>>, n: usize) {
    for _ in 0..n {
        assert!(matches!(input.peek().unwrap(), Symbol::Char(_)));
        input.advance();
    }
    input.mark();
}

fn text(input: &InputBuffer<StrSource<'_>>) -> String {
    input.matched().iter().collect()
}

// === Peek / Advance ===

#[test]
fn peek_does_not_consume() {
    let mut input = buffer("ab", 16);
    input.begin();
    assert_eq!(input.peek().unwrap(), Symbol::Char('a'));
    assert_eq!(input.peek().unwrap(), Symbol::Char('a'));
    input.advance();
    assert_eq!(input.peek().unwrap(), Symbol::Char('b'));
}

#[test]
fn eof_is_a_sentinel_symbol() {
    let mut input = buffer("x", 16);
    input.begin();
    input.peek().unwrap();
    input.advance();
    assert_eq!(input.peek().unwrap(), Symbol::Eof);
    // Stays at EOF.
    assert_eq!(input.peek().unwrap(), Symbol::Eof);
}

#[test]
fn empty_source_is_immediately_eof() {
    let mut input = buffer("", 16);
    input.begin();
    assert_eq!(input.peek().unwrap(), Symbol::Eof);
}

// === Marking / Commit ===

#[test]
fn commit_returns_start_and_accepted_length() {
    let mut input = buffer("abcdef", 16);
    input.begin();
    take(&mut input, 3);
    assert_eq!(input.commit().unwrap(), (Position::START, 3));
    assert_eq!(text(&input), "abc");

    input.begin();
    take(&mut input, 2);
    let (pos, len) = input.commit().unwrap();
    assert_eq!(pos.offset, 3);
    assert_eq!(len, 2);
    assert_eq!(text(&input), "de");
}

#[test]
fn lookahead_past_mark_is_rolled_back() {
    let mut input = buffer("abcd", 16);
    input.begin();
    take(&mut input, 1);
    // Read two more chars without accepting them.
    input.peek().unwrap();
    input.advance();
    input.peek().unwrap();
    input.advance();
    assert_eq!(input.commit().unwrap().1, 1);

    input.begin();
    assert_eq!(input.peek().unwrap(), Symbol::Char('b'));
}

#[test]
fn pushback_retracts_mark() {
    let mut input = buffer("//x\n", 16);
    input.begin();
    take(&mut input, 4);
    input.pushback(1);
    assert_eq!(input.match_len(), 3);
    input.commit().unwrap();
    assert_eq!(text(&input), "//x");
}

#[test]
fn pushback_of_entire_match_is_allowed() {
    let mut input = buffer("ab", 16);
    input.begin();
    take(&mut input, 2);
    input.pushback(2);
    assert_eq!(input.match_len(), 0);
}

#[test]
#[should_panic(expected = "exceeds match length")]
fn pushback_beyond_match_panics() {
    let mut input = buffer("ab", 16);
    input.begin();
    take(&mut input, 1);
    input.pushback(2);
}

#[test]
fn accept_first_takes_one_char() {
    let mut input = buffer("#rest", 16);
    input.begin();
    input.peek().unwrap();
    input.advance();
    input.peek().unwrap();
    input.advance();
    assert_eq!(input.accept_first(), '#');
    assert_eq!(input.commit().unwrap().1, 1);
}

// === Refill & Growth ===

#[test]
fn refill_compacts_committed_text() {
    let mut input = buffer("abcdefgh", 4);
    for expected in "abcdefgh".chars() {
        input.begin();
        assert_eq!(input.peek().unwrap(), Symbol::Char(expected));
        input.advance();
        input.mark();
        input.commit().unwrap();
    }
    // Single-char matches never need more than the initial allocation.
    assert_eq!(input.capacity(), 4);
}

#[test]
fn open_match_larger_than_buffer_grows_it() {
    let mut input = buffer("abcdefghij", 2);
    input.begin();
    take(&mut input, 10);
    assert!(input.capacity() >= 10);
    assert_eq!(input.commit().unwrap(), (Position::START, 10));
    assert_eq!(text(&input), "abcdefghij");
}

#[test]
fn growth_at_least_doubles() {
    let mut input = buffer("abcde", 2);
    input.begin();
    take(&mut input, 3);
    assert!(input.capacity() >= 4);
}

// === Position tracking ===

#[test]
fn lines_and_columns_follow_terminators() {
    let mut input = buffer("ab\ncd\r\nef\rg", 4);
    input.begin();
    take(&mut input, 11);
    // Commit char by char would be equivalent; committing at once must agree.
    input.commit().unwrap();
    let pos = input.position();
    assert_eq!(pos.offset, 11);
    assert_eq!(pos.line, 3);
    assert_eq!(pos.column, 1);
}

#[test]
fn crlf_split_across_commits_counts_once() {
    let mut input = buffer("a\r\nb", 16);
    for _ in 0..3 {
        input.begin();
        take(&mut input, 1);
        input.commit().unwrap();
    }
    let pos = input.position();
    assert_eq!((pos.line, pos.column), (1, 0));
}

#[test]
fn unicode_line_separators_count_as_lines() {
    let mut input = buffer("a\u{2028}b", 16);
    input.begin();
    take(&mut input, 3);
    input.commit().unwrap();
    assert_eq!((input.position().line, input.position().column), (1, 1));
}

// === Reset ===

#[test]
fn reset_discards_state_and_returns_old_source() {
    let mut input = buffer("abcdefgh", 2);
    input.begin();
    take(&mut input, 6);
    input.commit().unwrap();
    assert!(input.capacity() > 2);

    let mut old = input.reset(StrSource::new("xy"));
    assert_eq!(input.capacity(), 2);
    assert_eq!(input.position(), Position::START);
    input.begin();
    assert_eq!(input.peek().unwrap(), Symbol::Char('x'));

    // Everything had already been pulled into the discarded buffer.
    let mut rest = ['\0'; 8];
    assert_eq!(old.read_chars(&mut rest).unwrap(), 0);
}

#[test]
fn rewind_restarts_the_current_match() {
    let mut input = buffer("abc", 16);
    input.begin();
    take(&mut input, 2);
    input.rewind();
    assert_eq!(input.match_len(), 0);

    input.begin();
    assert_eq!(input.peek().unwrap(), Symbol::Char('a'));
    take(&mut input, 3);
    let (start, len) = input.commit().unwrap();
    assert_eq!((start.offset, len), (0, 3));
}

// === Offset limit ===

#[test]
fn commit_up_to_the_last_offset() {
    let mut input = buffer("ab", 16);
    input.pos.offset = u32::MAX - 2;
    input.begin();
    take(&mut input, 2);
    let (start, len) = input.commit().unwrap();
    assert_eq!((start.offset, len), (u32::MAX - 2, 2));
    assert_eq!(input.position().offset, u32::MAX);
}

#[test]
fn commit_past_the_last_offset_is_refused() {
    let mut input = buffer("abc", 16);
    input.pos.offset = u32::MAX - 2;
    input.begin();
    take(&mut input, 3);
    assert_eq!(input.commit(), None);
    // Nothing was committed.
    assert_eq!(input.position().offset, u32::MAX - 2);
    assert_eq!(input.position().column, 0);
}
