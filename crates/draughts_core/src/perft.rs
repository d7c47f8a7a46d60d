use crate::{engine::Engine, types::Move};

/// Pure perft node count.
/// Counts all positions reachable from the current one in `depth` calls to
/// `act`. Each single jump of a multi-jump counts as its own ply.
pub fn perft(engine: &Engine, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(engine: &Engine, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };
        engine.legal_moves_into(buf);

        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for &mv in buf.iter() {
            let mut child = *engine;
            if child.act(mv).is_ok() {
                nodes += inner(&child, depth - 1, rest);
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(engine, depth, &mut layers[..])
}

/// Per-move breakdown of `perft`, in legal-move order.
pub fn perft_divide(engine: &Engine, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    engine
        .legal_moves()
        .into_iter()
        .filter_map(|mv| {
            let mut child = *engine;
            child.act(mv).ok()?;
            Some((mv, perft(&child, depth - 1)))
        })
        .collect()
}
