use long_multiplication::{Context, Multiplication};

macro_rules! print_diagram {
    ($multiplier:literal x $multiplicand:literal) => {
        print_diagram!($multiplier x $multiplicand, Context::default());
    };
    ($multiplier:literal x $multiplicand:literal, $ctx:expr) => {
        println!("{} x {}:", $multiplier, $multiplicand);
        match Multiplication::with_context($multiplier, $multiplicand, &$ctx) {
            Ok(mult) => {
                println!("{}", mult);
                println!("column totals: {:?}", mult.column_sums());
                println!("after carrying: {:?}\n", mult.subtotals());
            }
            Err(err) => println!("error: {}\n", err),
        }
    };
}

fn main() {
    print_diagram!("12" x "34");
    print_diagram!("5" x "79");
    print_diagram!("8642" x "13597");
    print_diagram!("0" x "999", Context::from_description_flag("no"));
    print_diagram!("007" x "25", Context::from_description_flag("no"));
    print_diagram!("31415926535" x "27182818284", Context::from_description_flag("no"));

    // rejected operands
    print_diagram!("12a" x "34");
    print_diagram!("123456" x "7", Context::default().with_max_operand_digits(4));
}
