use console::Style;

use crate::score::{MutantRecord, ScoreReport};

pub fn print_error(msg: &str) {
    let style = Style::new().red().bold();
    eprintln!("{} {}", style.apply_to("✗"), msg);
}

pub fn print_success(msg: &str) {
    let style = Style::new().green().bold();
    println!("{} {}", style.apply_to("✓"), msg);
}

pub fn print_report(report: &ScoreReport, duration_ms: u64) {
    let score_pct = report.score * 100.0;

    if report.survived == 0 {
        let style = Style::new().green().bold();
        println!(
            "{} {} mutants, all killed ({:.1}%) in {:.1}s",
            style.apply_to("✓"),
            report.total,
            score_pct,
            duration_ms as f64 / 1000.0,
        );
    } else {
        let style = Style::new().yellow().bold();
        println!(
            "{} {} survived / {} mutants ({:.1}% killed) in {:.1}s",
            style.apply_to("!"),
            report.survived,
            report.total,
            score_pct,
            duration_ms as f64 / 1000.0,
        );
    }

    println!();
    for rel in &report.per_relation {
        let id_style = Style::new().cyan().bold();
        println!(
            "  {} {}: {}/{} killed ({:.1}%)",
            id_style.apply_to(&rel.relation),
            rel.name,
            rel.killed,
            report.total,
            rel.score * 100.0,
        );
    }

    let dim = Style::new().dim();
    if !report.killed_by_all.is_empty() {
        println!(
            "  {} killed by every relation: {}",
            dim.apply_to("·"),
            report.killed_by_all.join(", ")
        );
    }
    for ex in &report.exclusive {
        if !ex.mutants.is_empty() {
            println!(
                "  {} killed only by {}: {}",
                dim.apply_to("·"),
                ex.relation,
                ex.mutants.join(", ")
            );
        }
    }

    if !report.survived_all.is_empty() {
        println!();
        for record in report.mutants.iter().filter(|r| !r.killed) {
            let ref_style = Style::new().cyan().bold();
            let op_style = Style::new().magenta();
            println!(
                "  {} {} {}",
                ref_style.apply_to(format!("@{}", record.id)),
                op_style.apply_to(&record.fault),
                Style::new().dim().apply_to(format!("[{}]", record.class)),
            );
        }
        println!();
        println!("Survivors are equivalent-mutant candidates or weak relation coverage.");
        println!("Use `metamorph show @<id>` for details on a specific mutant.");
    }
}

pub fn print_mutant_detail(record: &MutantRecord) {
    let ref_style = Style::new().cyan().bold();
    let dim = Style::new().dim();

    println!(
        "{} {} {}",
        ref_style.apply_to(format!("@{}", record.id)),
        record.fault,
        dim.apply_to(format!("[{}]", record.class)),
    );
    println!();

    if !record.killed {
        println!("  survived every relation");
        return;
    }

    println!("  killed by: {}", record.killed_by.join(", "));
    for violation in &record.violations {
        println!();
        let label_style = Style::new().magenta().bold();
        if violation.raised {
            println!(
                "  {} {}",
                label_style.apply_to(&violation.label),
                violation.detail
            );
            continue;
        }
        println!("  {}", label_style.apply_to(&violation.label));
        for line in violation.detail.lines() {
            if line.starts_with('-') {
                let del_style = Style::new().red();
                println!("    {}", del_style.apply_to(line));
            } else if line.starts_with('+') {
                let add_style = Style::new().green();
                println!("    {}", add_style.apply_to(line));
            } else {
                println!("    {}", dim.apply_to(line));
            }
        }
    }
}

pub fn print_status(report: &ScoreReport) {
    let score_pct = report.score * 100.0;

    println!(
        "Last run: {} mutants, {} killed, {} survived ({:.1}% score)",
        report.total, report.killed, report.survived, score_pct,
    );

    if report.survived > 0 {
        println!();
        for record in report.mutants.iter().filter(|r| !r.killed) {
            let ref_style = Style::new().cyan().bold();
            println!(
                "  {} {}",
                ref_style.apply_to(format!("@{}", record.id)),
                record.fault,
            );
        }
        println!();
        println!("Use `metamorph show @<id>` for details on a specific mutant.");
    }
}
