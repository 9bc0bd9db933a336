use static_huffman::{CodeTable, FrequencyTable, HuffmanTree};

fn main() {
    let freq = FrequencyTable::from_counts([
        ('a', 45),
        ('b', 13),
        ('c', 12),
        ('d', 16),
        ('e', 9),
        ('f', 5),
    ])
    .unwrap();

    let tree = HuffmanTree::build(&freq).unwrap();
    let table = CodeTable::from_tree(&tree);

    print!("{}", table);
    println!(
        "total weight {}, weighted path length {:?}",
        tree.weight(),
        tree.weighted_path_length()
    );
}
