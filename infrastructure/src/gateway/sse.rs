//! Incremental decoder for the chat proxy's event stream.
//!
//! The proxy relays `data: <json>\n\n` frames whose JSON envelope is
//! `{ choices: [ { delta: { content?: string } } ] }`, terminated by a
//! frame whose payload is literally `[DONE]`. Network chunk boundaries
//! are unrelated to frame boundaries, so the decoder keeps two pieces of
//! state across [`feed`](SseDecoder::feed) calls: an incomplete UTF-8
//! byte tail and a text buffer of not-yet-terminated lines.
//!
//! Malformed frames never abort the stream. A newline-terminated line
//! that fails to parse is pushed back onto the buffer and retried when
//! the next chunk arrives; whatever still fails at end of stream is
//! dropped by the final [`finish`](SseDecoder::finish) pass.

use serde::Deserialize;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

/// One streamed chunk of the completion envelope.
#[derive(Debug, Deserialize)]
struct ChatChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: ChunkDelta,
}

#[derive(Debug, Default, Deserialize)]
struct ChunkDelta {
    #[serde(default)]
    content: Option<String>,
}

impl ChatChunk {
    /// The first choice's delta content, if non-empty.
    fn into_delta(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|content| !content.is_empty())
    }
}

/// Incremental SSE decoder with partial-line buffering.
///
/// Feed raw byte chunks in arrival order; each call returns the text
/// deltas that became complete, in frame order. The output is invariant
/// under how the byte stream is chunked.
#[derive(Debug, Default)]
pub struct SseDecoder {
    /// Incomplete UTF-8 sequence carried to the next chunk.
    pending: Vec<u8>,
    /// Decoded text not yet split into complete lines.
    buffer: String,
    done: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the `[DONE]` sentinel has been observed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feed one chunk of raw bytes; returns the deltas it completed.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        if self.done {
            return Vec::new();
        }
        self.decode_utf8(chunk);
        self.drain_lines()
    }

    /// Final flush when the underlying stream ends.
    ///
    /// Applies the same per-line rules to any residual buffered text,
    /// but without re-buffering: lines that still fail to parse are
    /// silently discarded.
    pub fn finish(&mut self) -> Vec<String> {
        if self.done {
            return Vec::new();
        }
        // Flush whatever byte tail remains, lossily.
        if !self.pending.is_empty() {
            let tail = std::mem::take(&mut self.pending);
            self.buffer.push_str(&String::from_utf8_lossy(&tail));
        }

        let residue = std::mem::take(&mut self.buffer);
        let mut deltas = Vec::new();
        for raw in residue.split('\n') {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            let Some(payload) = Self::frame_payload(line) else {
                continue;
            };
            if payload == DONE_SENTINEL {
                continue;
            }
            if let Ok(chunk) = serde_json::from_str::<ChatChunk>(payload)
                && let Some(delta) = chunk.into_delta()
            {
                deltas.push(delta);
            }
        }
        deltas
    }

    /// Append `chunk` to the text buffer, carrying incomplete multi-byte
    /// sequences across calls and replacing invalid bytes with U+FFFD.
    fn decode_utf8(&mut self, chunk: &[u8]) {
        self.pending.extend_from_slice(chunk);
        let bytes = std::mem::take(&mut self.pending);
        let mut rest = bytes.as_slice();

        loop {
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    self.buffer.push_str(text);
                    return;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    self.buffer
                        .push_str(&String::from_utf8_lossy(&rest[..valid]));
                    match e.error_len() {
                        // Truly invalid bytes: replace and continue.
                        Some(len) => {
                            self.buffer.push('\u{FFFD}');
                            rest = &rest[valid + len..];
                        }
                        // Incomplete sequence at the end: keep for the
                        // next chunk.
                        None => {
                            self.pending = rest[valid..].to_vec();
                            return;
                        }
                    }
                }
            }
        }
    }

    /// Extract complete lines from the buffer and decode their frames.
    fn drain_lines(&mut self) -> Vec<String> {
        let mut deltas = Vec::new();

        while !self.done {
            let Some(newline) = self.buffer.find('\n') else {
                break;
            };
            let mut line: String = self.buffer.drain(..=newline).collect();
            line.pop(); // the '\n'
            if line.ends_with('\r') {
                line.pop();
            }

            let Some(payload) = Self::frame_payload(&line) else {
                continue;
            };
            if payload == DONE_SENTINEL {
                self.done = true;
                break;
            }

            match serde_json::from_str::<ChatChunk>(payload) {
                Ok(chunk) => {
                    if let Some(delta) = chunk.into_delta() {
                        deltas.push(delta);
                    }
                }
                Err(_) => {
                    // The line was cut mid-frame by a chunk boundary.
                    // Put it back in front of the buffer and wait for
                    // the rest to arrive.
                    self.buffer.insert(0, '\n');
                    self.buffer.insert_str(0, &line);
                    break;
                }
            }
        }

        deltas
    }

    /// Payload of a `data: ` frame, or `None` for empty lines, comment
    /// frames and other fields.
    fn frame_payload(line: &str) -> Option<&str> {
        if line.trim().is_empty() || line.starts_with(':') {
            return None;
        }
        line.strip_prefix(DATA_PREFIX).map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(content: &str) -> String {
        format!(
            "data: {{\"choices\":[{{\"delta\":{{\"content\":{}}}}}]}}\n\n",
            serde_json::to_string(content).unwrap()
        )
    }

    fn decode_all(decoder: &mut SseDecoder, bytes: &[u8]) -> String {
        let mut out = String::new();
        for delta in decoder.feed(bytes) {
            out.push_str(&delta);
        }
        out
    }

    #[test]
    fn assembles_deltas_in_frame_order() {
        let mut decoder = SseDecoder::new();
        let stream = format!("{}{}data: [DONE]\n\n", frame("Hola"), frame(" mundo"));

        let out = decode_all(&mut decoder, stream.as_bytes());
        assert_eq!(out, "Hola mundo");
        assert!(decoder.is_done());
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn chunk_boundary_invariance() {
        let stream = format!(
            "{}{}{}data: [DONE]\n\n",
            frame("El "),
            frame("Mundo "),
            frame("del Revés")
        );
        let bytes = stream.as_bytes();

        // Whole stream at once as the reference
        let mut reference = SseDecoder::new();
        let expected = decode_all(&mut reference, bytes);
        assert_eq!(expected, "El Mundo del Revés");

        // Split at every single byte offset
        for split in 0..=bytes.len() {
            let mut decoder = SseDecoder::new();
            let mut out = decode_all(&mut decoder, &bytes[..split]);
            out.push_str(&decode_all(&mut decoder, &bytes[split..]));
            for delta in decoder.finish() {
                out.push_str(&delta);
            }
            assert_eq!(out, expected, "split at byte {split}");
        }
    }

    #[test]
    fn byte_at_a_time_matches_reference() {
        let stream = format!("{}{}data: [DONE]\n\n", frame("poco"), frame(" a poco"));
        let mut decoder = SseDecoder::new();
        let mut out = String::new();
        for byte in stream.as_bytes() {
            out.push_str(&decode_all(&mut decoder, &[*byte]));
        }
        assert_eq!(out, "poco a poco");
        assert!(decoder.is_done());
    }

    #[test]
    fn comment_and_empty_lines_are_ignored() {
        let mut decoder = SseDecoder::new();
        let stream = format!(": keep-alive\n\n\n{}: otro\n\ndata: [DONE]\n\n", frame("ok"));
        assert_eq!(decode_all(&mut decoder, stream.as_bytes()), "ok");
    }

    #[test]
    fn non_data_fields_are_ignored() {
        let mut decoder = SseDecoder::new();
        let stream = format!("event: message\nid: 7\n{}data: [DONE]\n\n", frame("ok"));
        assert_eq!(decode_all(&mut decoder, stream.as_bytes()), "ok");
    }

    #[test]
    fn crlf_lines_are_trimmed() {
        let mut decoder = SseDecoder::new();
        let stream = frame("ok").replace('\n', "\r\n");
        assert_eq!(decode_all(&mut decoder, stream.as_bytes()), "ok");
    }

    #[test]
    fn frame_split_across_chunks_is_not_lost_or_duplicated() {
        let full = frame("entero");
        let bytes = full.as_bytes();
        // Cut in the middle of the JSON payload
        let cut = full.find("ent").unwrap();

        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(&bytes[..cut]).is_empty());
        let rest = decode_all(&mut decoder, &bytes[cut..]);
        assert_eq!(rest, "entero");
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn multibyte_character_split_across_chunks() {
        let full = frame("años 80 ⚡");
        let bytes = full.as_bytes();
        // Find the lightning bolt (3 bytes) and split inside it
        let bolt = full.find('⚡').unwrap();

        let mut decoder = SseDecoder::new();
        let mut out = decode_all(&mut decoder, &bytes[..bolt + 1]);
        out.push_str(&decode_all(&mut decoder, &bytes[bolt + 1..]));
        assert_eq!(out, "años 80 ⚡");
    }

    #[test]
    fn nothing_after_done_is_emitted() {
        let mut decoder = SseDecoder::new();
        let stream = format!("data: [DONE]\n\n{}", frame("tarde"));
        assert_eq!(decode_all(&mut decoder, stream.as_bytes()), "");
        assert!(decoder.is_done());
        assert!(decoder.feed(frame("más").as_bytes()).is_empty());
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn empty_delta_content_is_skipped() {
        let mut decoder = SseDecoder::new();
        let stream = format!(
            "{}data: {{\"choices\":[{{\"delta\":{{}}}}]}}\n\ndata: {{\"choices\":[]}}\n\n{}",
            frame(""),
            frame("solo esto")
        );
        assert_eq!(decode_all(&mut decoder, stream.as_bytes()), "solo esto");
    }

    #[test]
    fn finish_recovers_unterminated_final_frame() {
        let mut decoder = SseDecoder::new();
        // No trailing newline: stream ended mid-frame
        let partial = frame("final").trim_end().to_string();
        assert!(decoder.feed(partial.as_bytes()).is_empty());
        assert_eq!(decoder.finish(), vec!["final".to_string()]);
    }

    #[test]
    fn finish_silently_drops_malformed_residue() {
        let mut decoder = SseDecoder::new();
        decoder.feed(b"data: {\"choices\":[{\"delta\":{\"content\":\"truncad");
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn rebuffered_invalid_line_never_emits() {
        // A newline-terminated line that fails to parse is pushed back
        // and retried, then dropped by the final flush, never emitted.
        let mut decoder = SseDecoder::new();
        let first = decoder.feed(b"data: {\"choices\":[{\"delta\":{\"content\":\"una\n");
        assert!(first.is_empty());

        // Later frames still decode even with the bad line in front.
        let later = decoder.feed(frame("bien").as_bytes());
        assert!(later.is_empty(), "blocked until the bad line is resolved");

        let rest = decoder.finish();
        assert_eq!(rest, vec!["bien".to_string()]);
    }

    #[test]
    fn invalid_utf8_bytes_become_replacement_chars() {
        let mut decoder = SseDecoder::new();
        // Lone 0xFF inside the payload text is not valid UTF-8
        let mut bytes = b"data: {\"choices\":[{\"delta\":{\"content\":\"a".to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice(b"b\"}}]}\n\n");

        let out = decoder.feed(&bytes);
        assert_eq!(out, vec!["a\u{FFFD}b".to_string()]);
    }
}
