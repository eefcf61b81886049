pub mod p900_journal;
