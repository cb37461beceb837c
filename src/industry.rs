// 🏢 Industry Analytics - client counting, industry join, renewal rates

use std::collections::{BTreeMap, HashMap};

use crate::schema::{Client, IndustrySubscription, Subscription};

// ============================================================================
// PREDICATE COUNTER
// ============================================================================

/// Count clients whose industry is one of `targets`.
///
/// Unknown industries never match and are simply excluded. The count is
/// order-insensitive; an empty client table yields 0.
pub fn count_in_industries(clients: &[Client], targets: &[&str]) -> usize {
    clients
        .iter()
        .filter(|c| targets.contains(&c.industry.as_str()))
        .count()
}

// ============================================================================
// EQUI-JOIN + GROUP AGGREGATOR
// ============================================================================

/// Left-join subscriptions with clients on `client_id`.
///
/// Every subscription is kept; a subscription with no matching client gets
/// `industry = None`. If the client table contains duplicate ids (it should
/// not — `client_id` is a candidate key) the first occurrence wins.
pub fn join_industries(
    subscriptions: &[Subscription],
    clients: &[Client],
) -> Vec<IndustrySubscription> {
    let mut by_id: HashMap<u64, &str> = HashMap::with_capacity(clients.len());
    for client in clients {
        by_id.entry(client.client_id).or_insert(client.industry.as_str());
    }

    subscriptions
        .iter()
        .map(|sub| IndustrySubscription {
            subscription: sub.clone(),
            industry: by_id.get(&sub.client_id).map(|s| s.to_string()),
        })
        .collect()
}

/// Mean of `renewed` (as 1/0) per industry. Rows without a known industry
/// form no group.
pub fn renewal_rate_by_industry(rows: &[IndustrySubscription]) -> BTreeMap<String, f64> {
    let mut renewed: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for row in rows {
        if let Some(industry) = &row.industry {
            let (hits, total) = renewed.entry(industry.as_str()).or_insert((0, 0));
            if row.subscription.renewed {
                *hits += 1;
            }
            *total += 1;
        }
    }

    renewed
        .into_iter()
        .map(|(industry, (hits, total))| (industry.to_string(), hits as f64 / total as f64))
        .collect()
}

/// Industry with the highest renewal rate, `None` if there are no groups.
///
/// Ties resolve to the lexicographically smallest label: the map iterates in
/// key order and the best entry is replaced only on a strictly greater rate.
pub fn top_industry(rates: &BTreeMap<String, f64>) -> Option<(String, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (industry, &rate) in rates {
        match best {
            Some((_, best_rate)) if rate <= best_rate => {}
            _ => best = Some((industry.as_str(), rate)),
        }
    }
    best.map(|(industry, rate)| (industry.to_string(), rate))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn client(id: u64, industry: &str) -> Client {
        Client {
            client_id: id,
            industry: industry.to_string(),
        }
    }

    fn subscription(client_id: u64, renewed: bool) -> Subscription {
        Subscription {
            client_id,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
            renewed,
        }
    }

    #[test]
    fn counts_matching_industries() {
        let clients = vec![
            client(1, "Fintech"),
            client(2, "Retail"),
            client(3, "Crypto"),
            client(4, "Fintech"),
        ];
        assert_eq!(count_in_industries(&clients, &["Fintech", "Crypto"]), 3);
    }

    #[test]
    fn count_is_order_insensitive() {
        let mut clients = vec![client(1, "Fintech"), client(2, "Retail"), client(3, "Crypto")];
        let forward = count_in_industries(&clients, &["Fintech", "Crypto"]);
        clients.reverse();
        assert_eq!(count_in_industries(&clients, &["Fintech", "Crypto"]), forward);
    }

    #[test]
    fn count_of_empty_table_is_zero() {
        assert_eq!(count_in_industries(&[], &["Fintech", "Crypto"]), 0);
    }

    #[test]
    fn join_keeps_unmatched_subscriptions() {
        let clients = vec![client(1, "Fintech")];
        let subs = vec![subscription(1, true), subscription(99, false)];
        let joined = join_industries(&subs, &clients);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].industry.as_deref(), Some("Fintech"));
        assert_eq!(joined[1].industry, None);
    }

    #[test]
    fn renewal_rates_per_industry() {
        let clients = vec![client(1, "Fintech"), client(2, "Retail"), client(3, "Retail")];
        let subs = vec![
            subscription(1, true),
            subscription(2, true),
            subscription(3, false),
        ];
        let rates = renewal_rate_by_industry(&join_industries(&subs, &clients));

        assert_eq!(rates["Fintech"], 1.0);
        assert_eq!(rates["Retail"], 0.5);
    }

    #[test]
    fn unmatched_rows_form_no_group() {
        let subs = vec![subscription(99, true)];
        let rates = renewal_rate_by_industry(&join_industries(&subs, &[]));
        assert!(rates.is_empty());
    }

    #[test]
    fn top_industry_picks_the_maximum() {
        let clients = vec![client(1, "Fintech"), client(2, "Retail")];
        let subs = vec![subscription(1, true), subscription(2, false)];
        let rates = renewal_rate_by_industry(&join_industries(&subs, &clients));

        let (industry, rate) = top_industry(&rates).unwrap();
        assert_eq!(industry, "Fintech");
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn top_industry_tie_breaks_lexicographically() {
        let mut rates = BTreeMap::new();
        rates.insert("Retail".to_string(), 0.75);
        rates.insert("Crypto".to_string(), 0.75);
        rates.insert("Fintech".to_string(), 0.5);

        let (industry, _) = top_industry(&rates).unwrap();
        assert_eq!(industry, "Crypto");
    }

    #[test]
    fn top_industry_of_empty_map_is_none() {
        assert_eq!(top_industry(&BTreeMap::new()), None);
    }
}
