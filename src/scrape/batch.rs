// src/scrape/batch.rs
use std::{
    sync::{
        Arc, mpsc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use crate::{
    config::LabelOptions,
    model::{Entity, Label},
    progress::Progress,
    session::Session,
};

use super::label::LabelParser;

/// Outcome of a batch: parsed labels sorted by id, plus the ids that failed.
#[derive(Default)]
pub struct BatchResult {
    pub labels: Vec<Label>,
    pub failures: Vec<(u64, String)>,
}

/// Parse several labels on a small worker pool sharing the session's fetcher and caches.
/// One failing label does not stop the others.
pub fn parse_labels(
    session: &Session,
    ids: &[u64],
    options: LabelOptions,
    workers: usize,
    mut progress: Option<&mut dyn Progress>,
) -> BatchResult {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
        if ids.is_empty() {
            p.log("No label ids to process.");
        }
    }

    type Outcome = Result<Label, (u64, String)>;

    let ids_arc: Arc<Vec<u64>> = Arc::new(ids.to_vec());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Outcome>();

    let workers = workers.min(ids.len()).max(1);

    for _ in 0..workers {
        let ids = Arc::clone(&ids_arc);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let session = session.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= ids.len() {
                    break;
                }
                let id = ids[i];
                let result = LabelParser::new(&session, id, options)
                    .parse()
                    .map_err(|e| (id, e.to_string()));
                if tx.send(result).is_err() {
                    break;
                }
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut out = BatchResult::default();
    for _ in 0..ids_arc.len() {
        match res_rx.recv() {
            Ok(Ok(label)) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(label.id(), &label.name);
                }
                out.labels.push(label);
            }
            Ok(Err((id, msg))) => {
                loge!("Label {id}: {msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(id, &msg);
                }
                out.failures.push((id, msg));
            }
            Err(_) => break, // workers ended early
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} label(s) parsed, {} failed", out.labels.len(), out.failures.len()));
        p.finish();
    }

    out.labels.sort_by_key(|l| l.id());
    out.failures.sort_by_key(|(id, _)| *id);
    out
}
