//! Body-to-blocks splitter: break an
//! article body into paragraph-then-length-capped chunks matching the
//! backing store's per-block rich-text limit, with a hard cap on block count.

/// Conservative per-block character limit (the store's own limit is 2000;
/// this stays under it rather than chasing the exact boundary).
pub const MAX_BLOCK_CHARS: usize = 2000;
/// Conservative per-page block cap.
pub const MAX_BLOCKS_PER_PAGE: usize = 100;

/// Split `body` into paragraphs on blank-line boundaries, then split any
/// paragraph longer than [`MAX_BLOCK_CHARS`] on a character boundary so no
/// block exceeds the limit. Truncates to [`MAX_BLOCKS_PER_PAGE`] blocks.
pub fn split_into_blocks(body: &str) -> Vec<String> {
    let mut blocks = Vec::new();

    for paragraph in body.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
        let chars: Vec<char> = paragraph.chars().collect();
        if chars.is_empty() {
            continue;
        }
        for chunk in chars.chunks(MAX_BLOCK_CHARS) {
            blocks.push(chunk.iter().collect());
            if blocks.len() >= MAX_BLOCKS_PER_PAGE {
                return blocks;
            }
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_two_paragraphs_into_three_blocks() {
        let first = "a".repeat(2000);
        let second = "b".repeat(3500);
        let body = format!("{first}\n\n{second}");

        let blocks = split_into_blocks(&body);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].chars().count(), 2000);
        assert_eq!(blocks[1].chars().count(), 2000);
        assert_eq!(blocks[2].chars().count(), 1500);
        assert_eq!(blocks[0], first);
    }

    #[test]
    fn every_block_stays_under_the_limit() {
        let body = "x".repeat(10_000);
        let blocks = split_into_blocks(&body);
        assert!(blocks.iter().all(|b| b.chars().count() <= MAX_BLOCK_CHARS));
        assert_eq!(blocks.iter().map(|b| b.chars().count()).sum::<usize>(), 10_000);
    }

    #[test]
    fn caps_total_blocks() {
        let paragraphs: Vec<String> = (0..200).map(|i| format!("paragraph {i}")).collect();
        let body = paragraphs.join("\n\n");
        let blocks = split_into_blocks(&body);
        assert_eq!(blocks.len(), MAX_BLOCKS_PER_PAGE);
    }

    #[test]
    fn empty_body_yields_no_blocks() {
        assert!(split_into_blocks("").is_empty());
        assert!(split_into_blocks("\n\n\n").is_empty());
    }
}
