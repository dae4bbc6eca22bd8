use crate::data::PullRequestItem;

/// Label name that disqualifies a PR outright, compared case-insensitively.
pub const INVALID_LABEL: &str = "invalid";

/// Contest eligibility rule over a PR's label names.
///
/// The concrete rule set belongs to the contest integration; anything
/// implementing this trait can be plugged into the pipeline.
/// Implementations must be pure functions of the names they see.
pub trait LabelPredicate {
    fn is_eligible(&self, names: &[&str]) -> bool;
}

/// Rule used until an integration supplies a real one: every label set is
/// eligible.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibleByDefault;

impl LabelPredicate for EligibleByDefault {
    fn is_eligible(&self, _names: &[&str]) -> bool {
        true
    }
}

/// First pass: keep only PRs the eligibility rule accepts, order preserved.
pub fn retain_eligible<P>(prs: Vec<PullRequestItem>, rule: &P) -> Vec<PullRequestItem>
where
    P: LabelPredicate + ?Sized,
{
    prs.into_iter()
        .filter(|pr| {
            let names: Vec<&str> = pr.labels.iter().map(|l| l.name.as_str()).collect();
            rule.is_eligible(&names)
        })
        .collect()
}

/// Second pass: drop any PR carrying an explicit "invalid" label, order
/// preserved. The length of the result is the final total count.
pub fn drop_invalid(prs: Vec<PullRequestItem>) -> Vec<PullRequestItem> {
    prs.into_iter()
        .filter(|pr| {
            !pr.labels
                .iter()
                .any(|l| l.name.eq_ignore_ascii_case(INVALID_LABEL))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Label;

    struct RejectSpam;

    impl LabelPredicate for RejectSpam {
        fn is_eligible(&self, names: &[&str]) -> bool {
            !names.contains(&"spam")
        }
    }

    fn pr(id: u64, labels: &[&str]) -> PullRequestItem {
        PullRequestItem {
            id,
            title: format!("pr {id}"),
            html_url: format!("https://github.com/acme/widget/pull/{id}"),
            repository_url: "https://api.github.com/repos/acme/widget".to_string(),
            labels: labels
                .iter()
                .map(|&name| Label {
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    fn ids(prs: &[PullRequestItem]) -> Vec<u64> {
        prs.iter().map(|p| p.id).collect()
    }

    #[test]
    fn pass_two_drops_exactly_the_invalid_labelled_prs() {
        let prs = vec![
            pr(1, &[]),
            pr(2, &["invalid"]),
            pr(3, &["hacktoberfest-accepted"]),
            pr(4, &["Invalid"]),
            pr(5, &["spam", "INVALID"]),
            pr(6, &["invalidated"]),
        ];

        assert_eq!(ids(&drop_invalid(prs)), vec![1, 3, 6]);
    }

    #[test]
    fn pass_one_delegates_to_the_rule_and_keeps_order() {
        let prs = vec![pr(1, &["ok"]), pr(2, &["spam"]), pr(3, &[])];

        assert_eq!(ids(&retain_eligible(prs, &RejectSpam)), vec![1, 3]);
    }

    #[test]
    fn filters_are_idempotent_on_already_filtered_input() {
        let prs = vec![pr(1, &["a"]), pr(2, &["invalid"]), pr(3, &[])];

        let once = drop_invalid(retain_eligible(prs, &EligibleByDefault));
        let twice = drop_invalid(retain_eligible(once.clone(), &EligibleByDefault));

        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn default_rule_accepts_every_label_set() {
        assert!(EligibleByDefault.is_eligible(&[]));
        assert!(EligibleByDefault.is_eligible(&["anything", "at", "all"]));
    }
}
