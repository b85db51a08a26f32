use crate::loaders::format_score;
use crate::model::Admissions;
use crate::stats;

pub fn display_details(a: &Admissions) {
    for pool in a.pools() {
        let department = pool.department();
        if pool.accepted().is_empty() {
            continue;
        }
        println!("{department}:");
        for &id in pool.accepted() {
            let applicant = a.applicant(id);
            print!(
                "  - {} {}",
                applicant,
                format_score(applicant.effective_score(department))
            );
            if let Some(rank) = a.admitted_rank(id) {
                print!(" (choice {})", rank + 1);
            }
            println!();
        }
        println!();
    }
}

pub fn display_stats(a: &Admissions) {
    let applicants = a.applicants.len();
    let admitted = a.admitted_count();
    println!(
        "Applicants admitted/rejected/total: {}/{}/{}",
        admitted,
        applicants - admitted,
        applicants
    );
    println!("Departments (accepted/capacity):");
    for pool in a.pools() {
        println!(
            "  - {}: {}/{}",
            pool.department(),
            pool.accepted().len(),
            pool.capacity()
        );
    }
    let ranks = stats::statistics(a);
    let cumul = ranks.iter().scan(0, |s, &r| {
        *s += r;
        Some(*s)
    });
    let total: usize = ranks.iter().sum();
    if total > 0 {
        println!("Admissions by choice:");
    }
    for (rank, (n, c)) in ranks.iter().zip(cumul).enumerate() {
        if *n != 0 {
            println!(
                "  - choice {}: {} (cumulative {} - {:.2}%)",
                rank + 1,
                n,
                c,
                100.0 * c as f32 / total as f32
            );
        }
    }
}

pub fn display_rejected(a: &Admissions) {
    let mut rejected = a
        .rejected()
        .into_iter()
        .map(|id| a.applicant(id).full_name())
        .collect::<Vec<_>>();
    rejected.sort();
    if !rejected.is_empty() {
        println!("Rejected applicants:");
        for name in rejected {
            println!("  - {name}");
        }
    }
}
