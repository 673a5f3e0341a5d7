//! Balance Computation
//!
//! Pure arithmetic over a group's fetched expenses: total spent, per-member
//! paid totals, net balances (paid minus owed share, with each expense split
//! equally among its split set), and a suggested set of settling transfers.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::{Expense, Member};

/// Balances below this are treated as settled (half a cent of dust).
const EPSILON: f64 = 0.005;

/// One suggested repayment between two members
#[derive(Clone, Debug, PartialEq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Sum of all expense amounts in the group
pub fn group_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of amounts of expenses paid by the given member
pub fn paid_total(expenses: &[Expense], member_id: &str) -> f64 {
    expenses
        .iter()
        .filter(|e| e.paid_by.id == member_id)
        .map(|e| e.amount)
        .sum()
}

/// Net balance per member id: positive means the member is owed money,
/// negative means the member owes.
///
/// Every group member starts at zero so the result is zero-sum and lists
/// everyone, including members with no expenses. Payers or split
/// participants outside the member list still get an entry; nothing on the
/// wire prevents them.
pub fn net_balances(members: &[Member], expenses: &[Expense]) -> HashMap<String, f64> {
    let mut balances: HashMap<String, f64> =
        members.iter().map(|m| (m.id.clone(), 0.0)).collect();

    for expense in expenses {
        balances
            .entry(expense.paid_by.id.clone())
            .and_modify(|b| *b += expense.amount)
            .or_insert(expense.amount);

        if expense.split_among.is_empty() {
            continue;
        }
        let share = expense.amount / expense.split_among.len() as f64;
        for member in &expense.split_among {
            balances
                .entry(member.id.clone())
                .and_modify(|b| *b -= share)
                .or_insert(-share);
        }
    }

    balances
}

/// Greedily pair the largest debtor with the largest creditor until all
/// balances are cleared, producing at most `members - 1` transfers.
pub fn suggest_settlements(balances: &HashMap<String, f64>) -> Vec<Transfer> {
    let mut debtors: Vec<(String, f64)> = balances
        .iter()
        .filter(|(_, b)| **b < -EPSILON)
        .map(|(id, b)| (id.clone(), -b))
        .collect();
    let mut creditors: Vec<(String, f64)> = balances
        .iter()
        .filter(|(_, b)| **b > EPSILON)
        .map(|(id, b)| (id.clone(), *b))
        .collect();

    // Ascending by amount so the largest outstanding sit at the back; ties
    // broken by id for a deterministic result.
    let by_amount = |a: &(String, f64), b: &(String, f64)| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.0.cmp(&a.0))
    };
    debtors.sort_by(by_amount);
    creditors.sort_by(by_amount);

    let mut transfers = Vec::new();

    while let (Some(debtor), Some(creditor)) = (debtors.last_mut(), creditors.last_mut()) {
        let amount = round_cents(debtor.1.min(creditor.1));
        if amount > 0.0 {
            transfers.push(Transfer {
                from: debtor.0.clone(),
                to: creditor.0.clone(),
                amount,
            });
        }

        debtor.1 -= amount;
        creditor.1 -= amount;
        if debtor.1 <= EPSILON {
            debtors.pop();
        }
        if creditor.1 <= EPSILON {
            creditors.pop();
        }
    }

    transfers
}

/// Round to two decimal places (cents)
pub fn round_cents(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str) -> Member {
        Member {
            id: id.to_string(),
            name: id.to_string(),
            email: format!("{}@example.com", id),
        }
    }

    fn expense(id: &str, amount: f64, paid_by: &str, split_among: &[&str]) -> Expense {
        Expense {
            id: id.to_string(),
            title: format!("expense {}", id),
            amount,
            paid_by: member(paid_by),
            split_among: split_among.iter().map(|m| member(m)).collect(),
            group_id: "g1".to_string(),
            created_at: "2026-03-14T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_group_total() {
        let expenses = vec![
            expense("e1", 30.0, "a", &["a", "b", "c"]),
            expense("e2", 12.5, "b", &["a", "b"]),
        ];
        assert_eq!(group_total(&expenses), 42.5);
        assert_eq!(group_total(&[]), 0.0);
    }

    #[test]
    fn test_paid_total() {
        let expenses = vec![
            expense("e1", 30.0, "a", &["a", "b", "c"]),
            expense("e2", 12.5, "b", &["a", "b"]),
            expense("e3", 7.5, "a", &["c"]),
        ];
        assert_eq!(paid_total(&expenses, "a"), 37.5);
        assert_eq!(paid_total(&expenses, "b"), 12.5);
        assert_eq!(paid_total(&expenses, "c"), 0.0);
    }

    #[test]
    fn test_net_balances_equal_split() {
        let members = vec![member("a"), member("b"), member("c")];
        let expenses = vec![expense("e1", 30.0, "a", &["a", "b", "c"])];

        let balances = net_balances(&members, &expenses);
        assert_eq!(balances["a"], 20.0);
        assert_eq!(balances["b"], -10.0);
        assert_eq!(balances["c"], -10.0);
    }

    #[test]
    fn test_net_balances_zero_sum() {
        let members = vec![member("a"), member("b"), member("c")];
        let expenses = vec![
            expense("e1", 30.0, "a", &["a", "b", "c"]),
            expense("e2", 12.0, "b", &["a", "b"]),
            expense("e3", 9.99, "c", &["a", "b", "c"]),
        ];

        let balances = net_balances(&members, &expenses);
        let sum: f64 = balances.values().sum();
        assert!(sum.abs() < 1e-9, "balances must be zero-sum, got {}", sum);
    }

    #[test]
    fn test_net_balances_lists_idle_members() {
        let members = vec![member("a"), member("b"), member("c")];
        let expenses = vec![expense("e1", 10.0, "a", &["a", "b"])];

        let balances = net_balances(&members, &expenses);
        assert_eq!(balances["c"], 0.0);
        assert_eq!(balances.len(), 3);
    }

    #[test]
    fn test_suggest_settlements_single_creditor() {
        let balances = HashMap::from([
            ("a".to_string(), 20.0),
            ("b".to_string(), -10.0),
            ("c".to_string(), -10.0),
        ]);

        let transfers = suggest_settlements(&balances);
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].from, "b");
        assert_eq!(transfers[0].to, "a");
        assert_eq!(transfers[0].amount, 10.0);
        assert_eq!(transfers[1].from, "c");
        assert_eq!(transfers[1].amount, 10.0);
    }

    #[test]
    fn test_suggest_settlements_pairs_off_matching_amounts() {
        let balances = HashMap::from([
            ("a".to_string(), 10.0),
            ("b".to_string(), -10.0),
            ("c".to_string(), 5.0),
            ("d".to_string(), -5.0),
        ]);

        let transfers = suggest_settlements(&balances);
        assert_eq!(transfers.len(), 2);
        assert!(transfers.contains(&Transfer {
            from: "b".to_string(),
            to: "a".to_string(),
            amount: 10.0,
        }));
        assert!(transfers.contains(&Transfer {
            from: "d".to_string(),
            to: "c".to_string(),
            amount: 5.0,
        }));
    }

    #[test]
    fn test_suggest_settlements_clears_all_balances() {
        let members = vec![member("a"), member("b"), member("c"), member("d")];
        let expenses = vec![
            expense("e1", 100.0, "a", &["a", "b", "c", "d"]),
            expense("e2", 33.33, "b", &["b", "c"]),
            expense("e3", 7.25, "c", &["a", "d"]),
        ];

        let mut balances = net_balances(&members, &expenses);
        for transfer in suggest_settlements(&balances) {
            *balances.get_mut(&transfer.from).unwrap() += transfer.amount;
            *balances.get_mut(&transfer.to).unwrap() -= transfer.amount;
        }

        for (id, balance) in balances {
            assert!(balance.abs() <= 0.01, "{} left with {}", id, balance);
        }
    }

    #[test]
    fn test_suggest_settlements_ignores_settled_members() {
        let balances = HashMap::from([
            ("a".to_string(), 0.0),
            ("b".to_string(), 0.002),
            ("c".to_string(), -0.002),
        ]);
        assert!(suggest_settlements(&balances).is_empty());
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(3.3333333), 3.33);
        assert_eq!(round_cents(7.129), 7.13);
        assert_eq!(round_cents(10.0), 10.0);
    }
}
