use proptest::prelude::*;
use static_huffman::{
    compress, decode, decompress, encode, Artifact, CodeTable, FrequencyTable, HuffmanTree,
};

/// Minimum total encoded length for these weights, computed as the sum of all
/// merge costs without building a tree.
fn optimal_cost(weights: &[u64]) -> u64 {
    if weights.len() == 1 {
        return weights[0];
    }

    let mut pool = weights.to_vec();
    let mut cost = 0;
    while pool.len() > 1 {
        pool.sort_unstable_by(|a, b| b.cmp(a));
        let merged = pool.pop().unwrap() + pool.pop().unwrap();
        cost += merged;
        pool.push(merged);
    }
    cost
}

fn counts() -> impl Strategy<Value = Vec<(u8, u64)>> {
    prop::collection::btree_map(0..64u8, 1..1000u64, 1..40)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn test_round_trip(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let tree = HuffmanTree::from_symbols(input.iter().copied()).unwrap();
        let table = CodeTable::from_tree(&tree);

        let bits = encode(&input, &table).unwrap();
        prop_assert_eq!(decode(&bits, &table).unwrap(), input);
    }

    #[test]
    fn test_text_artifact_round_trip(input in "\\PC{1,200}") {
        let chars: Vec<char> = input.chars().collect();
        let artifact = compress(&chars).unwrap();
        let parsed = Artifact::<char>::parse(&artifact.to_text()).unwrap();

        prop_assert_eq!(&parsed, &artifact);
        prop_assert_eq!(decompress(&parsed).unwrap(), chars);
    }

    #[test]
    fn test_prefix_free(pairs in counts()) {
        let freq = FrequencyTable::from_counts(pairs).unwrap();
        let table = CodeTable::from_tree(&HuffmanTree::build(&freq).unwrap());

        prop_assert_eq!(table.len(), freq.len());
        prop_assert!(table.is_prefix_free());

        let codes: Vec<_> = table.iter().map(|(_, c)| c.to_bitvec()).collect();
        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j && a.len() <= b.len() {
                    prop_assert_ne!(&b[..a.len()], a.as_bitslice());
                }
            }
        }
    }

    #[test]
    fn test_optimal(pairs in counts()) {
        let weights: Vec<u64> = pairs.iter().map(|&(_, w)| w).collect();
        let freq = FrequencyTable::from_counts(pairs).unwrap();
        let tree = HuffmanTree::build(&freq).unwrap();
        let table = CodeTable::from_tree(&tree);

        let expected = optimal_cost(&weights);
        prop_assert_eq!(tree.weighted_path_length(), Some(expected));
        prop_assert_eq!(table.weighted_length(&freq).unwrap(), expected);
    }

    #[test]
    fn test_complete_code(pairs in counts()) {
        prop_assume!(pairs.len() > 1);
        let freq = FrequencyTable::from_counts(pairs).unwrap();
        let table = CodeTable::from_tree(&HuffmanTree::build(&freq).unwrap());

        // a full binary tree satisfies Kraft's inequality with equality
        let max = table.max_code_len() as u32;
        let kraft: u128 = table.iter().map(|(_, c)| 1u128 << (max - c.len() as u32)).sum();
        prop_assert_eq!(kraft, 1u128 << max);
    }

    #[test]
    fn test_deterministic(pairs in counts()) {
        let shuffled: Vec<_> = pairs.iter().rev().copied().collect();
        let a = CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::from_counts(pairs).unwrap()).unwrap());
        let b = CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::from_counts(shuffled).unwrap()).unwrap());

        prop_assert_eq!(a.to_string(), b.to_string());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_single_symbol(symbol in any::<char>(), n in 1..100usize) {
        let input = vec![symbol; n];
        let artifact = compress(&input).unwrap();

        prop_assert_eq!(artifact.payload().len(), n);
        prop_assert_eq!(decompress(&artifact).unwrap(), input);
    }
}
