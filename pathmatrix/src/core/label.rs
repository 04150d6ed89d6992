use super::id::VertexId;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// How vertices are named when shown to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Labeling {
    /// `A`, `B`, ..., `Z`, then `AA`, `AB`, ... like spreadsheet columns.
    #[default]
    Letters,
    /// `1`, `2`, `3`, ...
    Numbers,
}

impl Labeling {
    pub fn label(&self, vertex: VertexId) -> String {
        match self {
            Labeling::Letters => {
                let mut index = vertex.to_usize();
                let mut label = Vec::new();

                loop {
                    label.push(LETTERS[index % 26]);
                    if index < 26 {
                        break;
                    }
                    index = index / 26 - 1;
                }

                label.reverse();
                // Only ASCII letters are pushed.
                String::from_utf8(label).unwrap_or_default()
            }
            Labeling::Numbers => (vertex.to_usize() + 1).to_string(),
        }
    }

    /// Inverse of [`label`](Labeling::label). Letters are case-insensitive.
    pub fn parse(&self, label: &str) -> Option<VertexId> {
        let label = label.trim();

        match self {
            Labeling::Letters => {
                if label.is_empty() {
                    return None;
                }

                let mut index = 0usize;
                for byte in label.bytes() {
                    let digit = match byte {
                        b'A'..=b'Z' => byte - b'A',
                        b'a'..=b'z' => byte - b'a',
                        _ => return None,
                    };
                    index = index.checked_mul(26)?.checked_add(digit as usize + 1)?;
                }

                Some(VertexId::new(index - 1))
            }
            Labeling::Numbers => match label.parse::<usize>() {
                Ok(0) | Err(_) => None,
                Ok(number) => Some(VertexId::new(number - 1)),
            },
        }
    }

    pub fn labels(&self, vertex_count: usize) -> Vec<String> {
        (0..vertex_count)
            .map(|index| self.label(VertexId::new(index)))
            .collect()
    }
}
