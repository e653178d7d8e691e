// examples/shopping.rs
//
// The demonstration driver: fill a cart with six grocery items, print the
// exported contents, remove five of them by value, print again.

use cart::Cart;

fn main() {
    let mut cart = Cart::new();

    cart.add("One Gallon of Whole Milk");
    cart.add("Two 12 oz Cans of Tomato Sauce");
    cart.add("Three Pizza Rolls");
    cart.add("Four Big Pizzas");
    cart.add("Five Boxes of Cereal");
    cart.add("Six 12 Pack of Coca-Cola");

    println!("{:?}", cart.to_vec());

    cart.remove_item(&"One Gallon of Whole Milk");
    cart.remove_item(&"Two 12 oz Cans of Tomato Sauce");
    cart.remove_item(&"Three Pizza Rolls");
    cart.remove_item(&"Four Big Pizzas");
    cart.remove_item(&"Five Boxes of Cereal");

    println!("{:?}", cart.to_vec());
}
