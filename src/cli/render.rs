// src/cli/render.rs
//! Human-readable terminal output.

use colored::Colorize;

use super::handlers::PersonReport;
use crate::dates::life_span_label;
use crate::family::{FamilyView, Tally};
use crate::model::{Family, Person};
use crate::relations::Relative;
use crate::search::ScoredPerson;
use crate::snapshot::{Finding, Severity};

fn pluralize(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

fn person_line(p: &Person) -> String {
    let years = life_span_label(p.birth_date.as_deref(), p.death_date.as_deref());
    let mut line = format!("{} {}", p.id.dimmed(), p.display_name().bold());
    if !years.is_empty() {
        line.push_str(&format!(" ({years})"));
    }
    if let Some(place) = p.birth_place.as_deref() {
        line.push_str(&format!(" {}", place.dimmed()));
    }
    line
}

pub fn families(families: &[Family]) {
    if families.is_empty() {
        println!("{}", "No families.".dimmed());
        return;
    }
    for f in families {
        let stats = &f.statistics;
        println!(
            "{:<24} {:>5}  {}",
            f.surname.bold(),
            stats.total_members,
            pluralize(stats.generations, "generation").dimmed()
        );
        if !f.alternate_spellings.is_empty() {
            println!("  {} {}", "aka".dimmed(), f.alternate_spellings.join(", "));
        }
    }
    let n = families.len();
    println!("\n{n} {}", if n == 1 { "family" } else { "families" });
}

fn tallies(label: &str, items: &[Tally]) {
    if items.is_empty() {
        return;
    }
    let joined: Vec<String> = items.iter().map(|t| format!("{} ({})", t.value, t.count)).collect();
    println!("  {:<12} {}", label.cyan(), joined.join(", "));
}

pub fn family(view: &FamilyView, members: &[&Person]) {
    let s = &view.stats;
    println!("{} {}", "Family".dimmed(), view.surname.bold());
    println!(
        "  {:<12} {} ({} living)",
        "members".cyan(),
        view.member_ids.len(),
        s.living_members
    );
    println!("  {:<12} {}", "generations".cyan(), s.generations);
    if let (Some(a), Some(b)) = (s.earliest_birth, s.latest_birth) {
        println!("  {:<12} {a}-{b}", "births".cyan());
    }
    if let Some(avg) = s.average_lifespan {
        println!("  {:<12} {avg} years", "avg lifespan".cyan());
    }
    println!("  {:<12} {}", "marriages".cyan(), s.marriage_count);
    tallies("places", &s.common_places);
    tallies("occupations", &s.common_occupations);

    let find = |id: &str| members.iter().find(|p| p.id == id).copied();

    if !view.notable_ids.is_empty() {
        println!("\n{}", "Notable".yellow().bold());
        for p in view.notable_ids.iter().filter_map(|id| find(id)) {
            println!("  {}", person_line(p));
        }
    }

    println!("\n{}", "Generations".yellow().bold());
    for (_, label, ids) in &view.generations {
        println!("  {}", label.cyan());
        for p in ids.iter().filter_map(|id| find(id)) {
            println!("    {}", person_line(p));
        }
    }

    if !view.timeline.is_empty() {
        println!("\n{}", "Timeline".yellow().bold());
        for e in &view.timeline {
            println!("  {} {}", e.year.to_string().blue(), e.description);
        }
    }
}

fn relative_group(label: &str, group: &[Relative<'_>]) {
    if group.is_empty() {
        return;
    }
    println!("  {}", label.cyan());
    for r in group {
        println!("    {}", person_line(r.person));
    }
}

pub fn person(report: &PersonReport<'_>) {
    let p = report.person;
    println!("{}", p.display_name().bold());
    if !report.life_span.is_empty() {
        println!("  {}", report.life_span);
    }
    if let Some(age) = report.age {
        let label = if p.is_deceased() { "age at death" } else { "age" };
        println!("  {:<12} {age}", label.cyan());
    }
    for (label, value) in [
        ("born", p.birth_place.as_deref()),
        ("died", p.death_place.as_deref()),
        ("occupation", p.occupation.as_deref()),
    ] {
        if let Some(v) = value {
            println!("  {label:<12} {v}");
        }
    }
    for para in p.biography_paragraphs() {
        println!("\n  {para}");
    }

    let rel = &report.relatives;
    if !rel.is_empty() {
        println!("\n{}", "Relatives".yellow().bold());
        relative_group("spouses", &rel.spouses);
        relative_group("parents", &rel.parents);
        relative_group("children", &rel.children);
        relative_group("siblings", &rel.siblings);
    }

    if !report.photos.is_empty() || !report.documents.is_empty() {
        println!(
            "\n{} {}, {}",
            "Media".yellow().bold(),
            pluralize(report.photos.len(), "photo"),
            pluralize(report.documents.len(), "document")
        );
    }
}

pub fn people(results: &[&Person]) {
    for p in results {
        println!("{}", person_line(p));
    }
    println!("\n{}", pluralize(results.len(), "result").dimmed());
}

pub fn ranked(results: &[ScoredPerson<'_>]) {
    for s in results {
        println!("{:>4} {}", s.score.to_string().yellow(), person_line(s.person));
    }
    println!("\n{}", pluralize(results.len(), "result").dimmed());
}

pub fn findings(findings: &[Finding]) {
    if findings.is_empty() {
        println!("{}", "[OK] No integrity issues.".green().bold());
        return;
    }
    for f in findings {
        match f.severity {
            Severity::Warning => println!("{} {}", "warning:".yellow().bold(), f.message),
            Severity::Info => println!("{} {}", "info:".dimmed(), f.message.dimmed()),
        }
    }
    let warnings = findings.iter().filter(|f| f.severity == Severity::Warning).count();
    println!(
        "\n{}, {}",
        pluralize(warnings, "warning"),
        pluralize(findings.len() - warnings, "note")
    );
}
