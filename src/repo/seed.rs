/*
 * Copyright 2019-2020 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use super::entry::Entry;
use super::table::EntryTable;

/// The built-in terms as `(key, genre, description, example)`, in display order.
const SEED: &[(&str, &str, &str, &str)] = &[
    (
        "permutations",
        "itertools",
        "Permutations (every possible ordering)",
        "from itertools import permutations\nlist(permutations([1,2,3]))",
    ),
    (
        "combinations",
        "itertools",
        "Combinations (order does not matter)",
        "from itertools import combinations\nlist(combinations([1,2,3], 2))",
    ),
    (
        "product",
        "itertools",
        "Cartesian product (every combination of the elements)",
        "from itertools import product\nlist(product([0,1], repeat=2))",
    ),
    (
        "zip",
        "builtin",
        "Iterate over several lists in parallel",
        "for a, b in zip([1,2], ['a','b']):\n    print(a, b)",
    ),
    (
        "enumerate",
        "builtin",
        "Get each element of a list together with its index",
        "for i, val in enumerate(['a','b']):\n    print(i, val)",
    ),
    (
        "read_csv",
        "pandas",
        "Read a CSV file into a DataFrame",
        "import pandas as pd\ndf = pd.read_csv('data.csv')",
    ),
    (
        "plot",
        "matplotlib",
        "The basic function for drawing line charts and similar plots",
        "import matplotlib.pyplot as plt\nplt.plot([1,2,3], [4,5,6])\nplt.show()",
    ),
    (
        "array",
        "numpy",
        "The array type used for numerical and vector computation",
        "import numpy as np\na = np.array([1,2,3])",
    ),
    (
        "st.write",
        "streamlit",
        "Write text, variables, and more to the page",
        "import streamlit as st\nst.write('Hello, Streamlit')",
    ),
    (
        "datetime",
        "standard library",
        "Work with dates and times",
        "import datetime\ntoday = datetime.date.today()",
    ),
    (
        "open",
        "file io",
        "The basic function for reading and writing files",
        "with open('file.txt', 'r') as f:\n    content = f.read()",
    ),
];

/// Return the table a new dictionary starts with.
pub fn seed_entries() -> EntryTable {
    SEED.iter()
        .map(|&(key, genre, description, example)| {
            (key.to_owned(), Entry::new(description, example, genre))
        })
        .collect()
}
