use eyre::Result;

use stepwise_align::pairwise::scoring::{Equality, SubstitutionMatrix};
use stepwise_align::pairwise::trace::{CellLog, Noop, SnapshotHistory};
use stepwise_align::pairwise::{self, Align, Local};

type Score = i32;

type Engine = Local<Equality<Score, u8>>;

struct Workload<'a> {
    seq1: &'a str,
    seq2: &'a str,
    score: Score,
    rle: &'a str,
    seq1_span: (usize, usize),
    seq2_span: (usize, usize),
}

fn engine(equal: Score, different: Score, gap: Score) -> Engine {
    Local::new(Equality::new(equal, different, gap))
}

fn ensure(aligner: &Engine, w: &Workload<'_>) -> Result<()> {
    let result = aligner.align(&w.seq1, &w.seq2, &mut Noop::new())?;

    assert_eq!(*result.score(), w.score, "{} vs {}", w.seq1, w.seq2);
    assert_eq!(result.rle(), w.rle, "{} vs {}", w.seq1, w.seq2);
    assert_eq!(result.seq1(), &(w.seq1_span.0..w.seq1_span.1));
    assert_eq!(result.seq2(), &(w.seq2_span.0..w.seq2_span.1));

    // The reconstructed path must reproduce the maximum-cell score.
    let rescored = result.rescore(&w.seq1, &w.seq2, aligner.scoring())?;
    assert_eq!(rescored, *result.score());
    Ok(())
}

#[test]
fn test_known_alignments() -> Result<()> {
    let workload = vec![
        Workload {
            seq1: "GATTACA",
            seq2: "TAC",
            score: 6,
            rle: "3=",
            seq1_span: (3, 6),
            seq2_span: (0, 3),
        },
        Workload {
            seq1: "AAAATTTTTGGG",
            seq2: "TTTTT",
            score: 10,
            rle: "5=",
            seq1_span: (4, 9),
            seq2_span: (0, 5),
        },
    ];

    let aligner = engine(2, -1, -2);
    for w in &workload {
        ensure(&aligner, w)?;
    }

    // Alignment with an interior gap and mismatches.
    ensure(
        &engine(5, -4, -4),
        &Workload {
            seq1: "CGTGAATTCAT",
            seq2: "GACTTAC",
            score: 17,
            rle: "2=1X2=1v1=",
            seq1_span: (3, 9),
            seq2_span: (0, 7),
        },
    )?;
    Ok(())
}

#[test]
fn test_textbook_example() -> Result<()> {
    let aligner = engine(2, -1, -1);
    ensure(
        &aligner,
        &Workload {
            seq1: "ACACACTA",
            seq2: "AGCACACA",
            score: 12,
            rle: "1=1v5=1^1=",
            seq1_span: (0, 8),
            seq2_span: (0, 8),
        },
    )?;

    // Swapping the arguments mirrors the gaps.
    ensure(
        &aligner,
        &Workload {
            seq1: "AGCACACA",
            seq2: "ACACACTA",
            score: 12,
            rle: "1=1^5=1v1=",
            seq1_span: (0, 8),
            seq2_span: (0, 8),
        },
    )?;

    let (aligned1, aligned2, _) = pairwise::local("ACACACTA", "AGCACACA", 2, -1, -1)?;
    assert_eq!(aligned1, "A-CACACTA");
    assert_eq!(aligned2, "AGCACAC-A");
    Ok(())
}

#[test]
fn test_containment() -> Result<()> {
    for (seq1, seq2) in [
        ("ACACACTA", "AGCACACA"),
        ("GATTACA", "TAC"),
        ("CGTGAATTCAT", "GACTTAC"),
    ] {
        let (aligned1, aligned2, _) = pairwise::local(seq1, seq2, 2, -1, -1)?;

        // Fragments are contiguous substrings with no gap at either end.
        for aligned in [&aligned1, &aligned2] {
            assert!(!aligned.starts_with('-') && !aligned.ends_with('-'));
        }
        assert!(seq1.contains(&aligned1.replace('-', "")));
        assert!(seq2.contains(&aligned2.replace('-', "")));
        assert_eq!(aligned1.len(), aligned2.len());
    }
    Ok(())
}

#[test]
fn test_snapshot_count() -> Result<()> {
    let (seq1, seq2) = ("ACACACTA", "AGCACACA");
    let (n, m) = (seq1.len(), seq2.len());

    let mut history = SnapshotHistory::new();
    engine(2, -1, -1).align(&seq1, &seq2, &mut history)?;

    // No frames from initialization; one per filled cell.
    assert_eq!(history.len(), n * m);

    let frames = history.frames();
    // The first frame reflects the untouched zero borders.
    assert!(frames[0].row(0).iter().all(|x| *x == 0));
    assert_eq!(frames[0][(1, 1)], 2);
    // The maximum of the final frame is the score.
    assert_eq!(frames.last().unwrap().as_slice().iter().max(), Some(&12));

    let mut log = CellLog::new();
    engine(2, -1, -1).align(&seq1, &seq2, &mut log)?;
    assert_eq!(log.len(), n * m);
    Ok(())
}

#[test]
fn test_no_positive_cell_yields_empty_alignment() -> Result<()> {
    let aligner = engine(2, -1, -1);
    let result = aligner.align(&"TTTT", &"AAAA", &mut Noop::new())?;

    assert!(result.is_empty());
    assert_eq!(*result.score(), 0);
    assert_eq!(result.seq1(), &(0..0));
    assert_eq!(result.seq2(), &(0..0));

    let (aligned1, aligned2, frames) = pairwise::local("TTTT", "AAAA", 2, -1, -1)?;
    assert_eq!((aligned1.as_str(), aligned2.as_str()), ("", ""));
    assert_eq!(frames.len(), 16);
    Ok(())
}

#[test]
fn test_determinism() -> Result<()> {
    let run = || pairwise::local::<Score>("CGTGAATTCAT", "GACTTAC", 5, -4, -4);

    let (a1, a2, frames) = run()?;
    let (b1, b2, other) = run()?;
    assert_eq!((a1, a2), (b1, b2));
    assert_eq!(frames, other);
    Ok(())
}

#[test]
fn test_empty_input_rejected() {
    let aligner = engine(2, -1, -1);
    assert!(aligner.align(&"", &"ACGT", &mut Noop::new()).is_err());
    assert!(aligner.align(&"ACGT", &"", &mut Noop::new()).is_err());
    assert!(pairwise::local::<Score>("ACGT", "", 2, -1, -1).is_err());
}

#[test]
fn test_shared_substitution_matrix() -> Result<()> {
    let scheme = Equality::<Score, u8>::new(2, -1, -1);
    let (seq1, seq2) = ("ACACACTA", "AGCACACA");
    let subst = SubstitutionMatrix::build(&seq1, &seq2, &scheme)?;

    let aligner = Local::new(scheme);
    let direct = aligner.align(&seq1, &seq2, &mut Noop::new())?;
    let shared = aligner.align_with(&seq1, &seq2, &subst, &mut Noop::new())?;
    assert_eq!(direct, shared);
    Ok(())
}

#[test]
fn test_fallback_equivalence() -> Result<()> {
    let zeroed = pairwise::local::<Score>("ACACACTA", "AGCACACA", 0, 0, 0)?;
    let explicit = pairwise::local::<Score>("ACACACTA", "AGCACACA", 1, -1, -2)?;
    assert_eq!(zeroed, explicit);
    Ok(())
}
